use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::core::session::GameSession;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & the debug renderer

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (pixels_per_meter, debug_draw) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| (c.physics.pixels_per_meter, c.overlay.debug_draw))
            .unwrap_or((1.0, false));
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(pixels_per_meter.max(1e-3)),
            RapierDebugRenderPlugin {
                enabled: debug_draw,
                ..default()
            },
        ));
    }
}

/// Mirrors the session's simulation speed and the configured gravity onto
/// every Rapier context. A paused pipeline freezes all bodies.
pub fn apply_simulation_speed(
    session: Res<GameSession>,
    cfg: Res<GameConfig>,
    mut rapier_config: Query<&mut RapierConfiguration>,
) {
    let active = session.speed().is_running();
    let gravity = Vect::new(0.0, cfg.physics.gravity_y);
    for mut rc in &mut rapier_config {
        if rc.physics_pipeline_active != active {
            rc.physics_pipeline_active = active;
            info!(
                target: "physics",
                "simulation speed -> {}",
                session.speed().scale()
            );
        }
        if rc.gravity != gravity {
            rc.gravity = gravity;
        }
    }
}
