//! Start and restart handling.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Ball, ButtonLatch, SceneButton};
use crate::core::config::GameConfig;
use crate::core::events::RoundRestarted;
use crate::core::session::GameSession;

/// Buttons act when the press ends, like a tap.
pub fn handle_scene_buttons(
    mut buttons: Query<(&Interaction, &SceneButton, &mut ButtonLatch), Changed<Interaction>>,
    mut session: ResMut<GameSession>,
    mut restarted: EventWriter<RoundRestarted>,
) {
    for (interaction, button, mut latch) in &mut buttons {
        if !latch.released(*interaction) {
            continue;
        }
        match button {
            SceneButton::Start => {
                if session.press_start() {
                    info!(target: "session", "round started");
                }
            }
            SceneButton::Restart => {
                if session.restart() {
                    info!(target: "session", "round restarted");
                    restarted.write(RoundRestarted);
                }
            }
        }
    }
}

/// Puts the ball back at the start point, motionless and simulated again.
pub fn reset_ball_on_restart(
    mut commands: Commands,
    mut restarted: EventReader<RoundRestarted>,
    cfg: Res<GameConfig>,
    mut balls: Query<(Entity, &mut Transform, &mut Velocity), With<Ball>>,
) {
    if restarted.read().count() == 0 {
        return;
    }
    let start = cfg.ball_start();
    for (e, mut tf, mut vel) in &mut balls {
        tf.translation = start.extend(tf.translation.z);
        vel.linvel = Vec2::ZERO;
        if cfg.variant.rotation_enabled() {
            vel.angvel = 0.0;
            tf.rotation = Quat::IDENTITY;
        }
        commands.entity(e).remove::<RigidBodyDisabled>();
    }
}
