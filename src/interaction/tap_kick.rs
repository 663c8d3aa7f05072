use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Ball;
use crate::core::config::GameConfig;
use crate::core::events::{BallKicked, PointerReleased};
use crate::core::session::GameSession;
use crate::physics::kick::{ball_bounds, compute_kick, damp_before_kick};

/// Kicks the ball away from every release that lands on it while the round
/// runs. Releases elsewhere are ignored. No cooldown: each hit counts.
pub fn handle_tap_kick(
    mut releases: EventReader<PointerReleased>,
    mut session: ResMut<GameSession>,
    cfg: Res<GameConfig>,
    mut balls: Query<
        (&Transform, &mut Velocity, &mut ExternalImpulse),
        (With<Ball>, Without<RigidBodyDisabled>),
    >,
    mut kicked: EventWriter<BallKicked>,
) {
    for release in releases.read() {
        if !session.is_running() {
            continue;
        }
        let Ok((tf, mut vel, mut ext)) = balls.single_mut() else {
            return;
        };
        let center = tf.translation.truncate();
        if !ball_bounds(center, cfg.ball.radius, cfg.ball.scale).contains(release.world_pos) {
            continue;
        }
        let kick = compute_kick(
            center,
            release.world_pos,
            cfg.ball.radius,
            cfg.ball.scale,
            cfg.kick.force,
            cfg.variant,
        );
        vel.linvel = damp_before_kick(vel.linvel, cfg.kick.horizontal_damping);
        ext.impulse += kick.impulse;
        ext.torque_impulse += kick.torque_impulse;
        session.record_kick();
        debug!(
            target: "kick",
            "kick impulse=({:.0}, {:.0}) torque={:.0} score={}",
            kick.impulse.x,
            kick.impulse.y,
            kick.torque_impulse,
            session.score()
        );
        kicked.write(BallKicked {
            impulse: kick.impulse,
            torque_impulse: kick.torque_impulse,
            score: session.score(),
        });
    }
}
