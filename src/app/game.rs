use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::core::config::{log_config_report, GameConfig};
use crate::core::events::{BallKicked, PointerReleased, RoundEnded, RoundRestarted};
use crate::core::session::GameSession;
use crate::core::system::system_order::{GameLogicSet, InputSet, PresentationSet};
use crate::debug::{DebugPlugin, OverlayToggles};
use crate::gameplay::audio::{load_kick_sound, play_kick_sound};
use crate::gameplay::flow::{handle_scene_buttons, reset_ball_on_restart};
use crate::gameplay::spawn::spawn_scene;
use crate::interaction::input::pointer::capture_pointer_releases;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::tap_kick::handle_tap_kick;
use crate::physics::contact::{detect_ground_contact, freeze_ball_on_round_end};
use crate::physics::rapier::rapier_physics::{apply_simulation_speed, PhysicsSetupPlugin};
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::hud::hud::{spawn_score_label, sync_scene_button, sync_score_label};

/// Session state machine, scene, HUD and kick handling. Runs headless: no
/// window, renderer, audio output or Rapier pipeline required, so tests add
/// it on top of `MinimalPlugins` and inject `PointerReleased` and
/// `CollisionEvent` directly.
pub struct GameplayCorePlugin;

impl Plugin for GameplayCorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.init_resource::<GameConfig>();
        }
        if !app.world().contains_resource::<OverlayToggles>() {
            let toggles = OverlayToggles::from(&app.world().resource::<GameConfig>().overlay);
            app.insert_resource(toggles);
        }
        app.init_resource::<GameSession>()
            .add_event::<PointerReleased>()
            .add_event::<BallKicked>()
            .add_event::<RoundEnded>()
            .add_event::<RoundRestarted>()
            .add_event::<CollisionEvent>()
            .configure_sets(Update, (InputSet, GameLogicSet, PresentationSet).chain())
            .add_systems(
                Startup,
                (
                    log_config_report,
                    spawn_scene,
                    spawn_score_label,
                    sync_scene_button,
                )
                    .chain(),
            )
            .add_systems(Update, handle_scene_buttons.in_set(InputSet))
            .add_systems(
                Update,
                (
                    handle_tap_kick,
                    detect_ground_contact,
                    freeze_ball_on_round_end,
                    reset_ball_on_restart,
                )
                    .chain()
                    .in_set(GameLogicSet),
            )
            .add_systems(
                Update,
                (
                    apply_simulation_speed,
                    sync_score_label,
                    sync_scene_button,
                    play_kick_sound,
                )
                    .in_set(PresentationSet),
            );
    }
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            GameplayCorePlugin,
            CameraPlugin,
            PhysicsSetupPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ))
        .add_systems(Startup, load_kick_sound)
        .add_systems(Update, capture_pointer_releases.in_set(InputSet));
    }
}
