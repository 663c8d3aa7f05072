use bevy::audio::Volume;
use bevy::prelude::*;

use crate::core::config::{GameConfig, SceneVariant};
use crate::core::events::BallKicked;
use crate::debug::OverlayToggles;

#[derive(Resource)]
pub struct KickSound(pub Handle<AudioSource>);

pub fn load_kick_sound(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    commands.insert_resource(KickSound(asset_server.load(cfg.assets.kick_sound.clone())));
}

/// `Classic` always plays the kick; `Spin` respects the sound toggle.
pub fn kick_sound_allowed(variant: SceneVariant, sound_on: bool) -> bool {
    !variant.sound_gated() || sound_on
}

pub fn play_kick_sound(
    mut commands: Commands,
    mut kicks: EventReader<BallKicked>,
    sound: Option<Res<KickSound>>,
    toggles: Res<OverlayToggles>,
    cfg: Res<GameConfig>,
) {
    let Some(sound) = sound else {
        kicks.clear();
        return;
    };
    for kick in kicks.read() {
        if !kick_sound_allowed(cfg.variant, toggles.sound) {
            continue;
        }
        debug!(
            target: "kick",
            "kick sound: strength={:.0} spin={:.0} score={}",
            kick.impulse.length(),
            kick.torque_impulse,
            kick.score
        );
        commands.spawn((
            AudioPlayer::new(sound.0.clone()),
            PlaybackSettings::DESPAWN
                .with_volume(Volume::Linear(cfg.kick.volume))
                .with_speed(cfg.kick.pitch),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_gating_by_variant() {
        assert!(kick_sound_allowed(SceneVariant::Classic, false));
        assert!(kick_sound_allowed(SceneVariant::Spin, true));
        assert!(!kick_sound_allowed(SceneVariant::Spin, false));
    }

    fn players_after_kick(variant: SceneVariant, sound_on: bool) -> usize {
        let mut cfg = GameConfig::default();
        cfg.variant = variant;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .insert_resource(OverlayToggles {
                sound: sound_on,
                ..default()
            })
            .insert_resource(KickSound(Handle::default()))
            .add_event::<BallKicked>()
            .add_systems(Update, play_kick_sound);
        app.world_mut().send_event(BallKicked {
            impulse: Vec2::Y,
            torque_impulse: 0.0,
            score: 1,
        });
        app.update();
        let world = app.world_mut();
        world.query::<&AudioPlayer>().iter(world).count()
    }

    #[test]
    fn kick_spawns_one_shot_player() {
        assert_eq!(players_after_kick(SceneVariant::Classic, false), 1);
        assert_eq!(players_after_kick(SceneVariant::Spin, false), 0);
        assert_eq!(players_after_kick(SceneVariant::Spin, true), 1);
    }
}
