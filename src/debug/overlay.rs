use bevy::prelude::*;

use super::modes::{DebugStats, OverlayToggles};
use crate::core::session::GameSession;

#[derive(Component)]
pub(crate) struct DebugOverlayText;

pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        // Absolute positioned node in top-left.
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

pub fn overlay_text(stats: &DebugStats, session: &GameSession) -> String {
    format!(
        "FPS {:.1} ft {:.1}ms score {} phase {:?} speed {}",
        stats.fps,
        stats.frame_time_ms,
        session.score(),
        session.phase(),
        session.speed().scale()
    )
}

pub(crate) fn debug_overlay_update(
    toggles: Res<OverlayToggles>,
    stats: Res<DebugStats>,
    session: Res<GameSession>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    if !toggles.stats {
        if !text.0.is_empty() {
            text.0.clear();
        }
        return;
    }
    text.0 = overlay_text(&stats, &session);
}
