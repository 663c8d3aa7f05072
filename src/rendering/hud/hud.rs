//! Score label and the start/restart button.
//!
//! The handlers that change the session never touch the HUD. Every frame the
//! HUD is reconciled against `GameSession::phase`, so at most one button
//! exists and the label is only visible after a round ended.
use bevy::prelude::*;

use crate::core::components::{SceneButton, ScoreLabel};
use crate::core::config::GameConfig;
use crate::core::session::{GameSession, Phase};

/// Button that should exist for a phase.
pub fn wanted_button(phase: Phase) -> Option<SceneButton> {
    match phase {
        Phase::Waiting => Some(SceneButton::Start),
        Phase::Running => None,
        Phase::Ended => Some(SceneButton::Restart),
    }
}

fn button_caption(kind: SceneButton) -> &'static str {
    match kind {
        SceneButton::Start => "Start",
        SceneButton::Restart => "Restart",
    }
}

pub fn spawn_score_label(mut commands: Commands, cfg: Res<GameConfig>) {
    let h = cfg.window.height;
    let y = h * cfg.hud.label_height_fraction - h * 0.5;
    commands.spawn((
        Name::new("ScoreLabel"),
        ScoreLabel,
        Text2d::new(String::new()),
        TextFont {
            font_size: cfg.hud.font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, y, 5.0),
        Visibility::Hidden,
    ));
}

pub fn sync_score_label(
    session: Res<GameSession>,
    mut labels: Query<(&mut Text2d, &mut Visibility), With<ScoreLabel>>,
) {
    let ended = session.phase() == Phase::Ended;
    let want = if ended {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for (mut text, mut vis) in &mut labels {
        if *vis != want {
            *vis = want;
        }
        if ended {
            let s = session.score_text();
            if text.0 != s {
                text.0 = s;
            }
        }
    }
}

fn spawn_button(
    commands: &mut Commands,
    asset_server: Option<&AssetServer>,
    cfg: &GameConfig,
    kind: SceneButton,
) {
    let hud = &cfg.hud;
    let left = cfg.window.width * 0.5 - hud.button_width * 0.5;
    // UI space grows downwards; a negative offset moves the button below center.
    let top = cfg.window.height * 0.5 - hud.button_offset_y - hud.button_height * 0.5;
    let image = asset_server
        .map(|a| a.load(cfg.assets.button.clone()))
        .unwrap_or_default();
    commands
        .spawn((
            Name::new(button_caption(kind)),
            Button,
            kind,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(top),
                width: Val::Px(hud.button_width),
                height: Val::Px(hud.button_height),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ImageNode::new(image),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new(button_caption(kind)),
                TextFont {
                    font_size: hud.font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn sync_scene_button(
    mut commands: Commands,
    session: Res<GameSession>,
    cfg: Res<GameConfig>,
    asset_server: Option<Res<AssetServer>>,
    buttons: Query<(Entity, &SceneButton)>,
) {
    let wanted = wanted_button(session.phase());
    let mut present = false;
    for (e, kind) in &buttons {
        if Some(*kind) == wanted && !present {
            present = true;
        } else {
            commands.entity(e).despawn();
        }
    }
    if let (Some(kind), false) = (wanted, present) {
        spawn_button(&mut commands, asset_server.as_deref(), &cfg, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hud_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .init_resource::<GameSession>()
            .add_systems(Startup, spawn_score_label)
            .add_systems(Update, (sync_score_label, sync_scene_button));
        app
    }

    fn buttons(app: &mut App) -> Vec<SceneButton> {
        let world = app.world_mut();
        world.query::<&SceneButton>().iter(world).copied().collect()
    }

    fn label(app: &mut App) -> (String, Visibility) {
        let world = app.world_mut();
        let (t, v) = world
            .query_filtered::<(&Text2d, &Visibility), With<ScoreLabel>>()
            .single(world)
            .unwrap();
        (t.0.clone(), *v)
    }

    #[test]
    fn label_sits_at_three_quarters_height() {
        let mut app = hud_app();
        app.update();
        let world = app.world_mut();
        let tf = world
            .query_filtered::<&Transform, With<ScoreLabel>>()
            .single(world)
            .unwrap();
        assert_eq!(tf.translation.y, 80.0);
    }

    #[test]
    fn one_button_per_phase() {
        let mut app = hud_app();
        app.update();
        assert_eq!(buttons(&mut app), vec![SceneButton::Start]);
        assert_eq!(label(&mut app).1, Visibility::Hidden);

        app.world_mut().resource_mut::<GameSession>().press_start();
        app.update();
        assert!(buttons(&mut app).is_empty());

        {
            let mut s = app.world_mut().resource_mut::<GameSession>();
            s.record_kick();
            s.end_round();
        }
        app.update();
        assert_eq!(buttons(&mut app), vec![SceneButton::Restart]);
        assert_eq!(label(&mut app), ("Score: 1".to_string(), Visibility::Visible));

        app.world_mut().resource_mut::<GameSession>().restart();
        app.update();
        assert!(buttons(&mut app).is_empty());
        assert_eq!(label(&mut app).1, Visibility::Hidden);
    }

    #[test]
    fn button_centered_below_middle() {
        let mut app = hud_app();
        app.update();
        let world = app.world_mut();
        let node = world
            .query_filtered::<&Node, With<SceneButton>>()
            .single(world)
            .unwrap();
        assert_eq!(node.left, Val::Px(180.0));
        assert_eq!(node.top, Val::Px(186.0));
    }
}
