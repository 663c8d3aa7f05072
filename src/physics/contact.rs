//! Ground contact ends the round.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Ball, EntityKind};
use crate::core::events::RoundEnded;
use crate::core::session::GameSession;

/// Ends the round on the first ball/ground contact while the simulation
/// runs. Contacts arriving after the pause (same frame or later) are ignored.
pub fn detect_ground_contact(
    mut collisions: EventReader<CollisionEvent>,
    kinds: Query<&EntityKind>,
    mut session: ResMut<GameSession>,
    mut ended: EventWriter<RoundEnded>,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        if !session.speed().is_running() {
            continue;
        }
        let (Ok(a), Ok(b)) = (kinds.get(*e1), kinds.get(*e2)) else {
            continue;
        };
        if !EntityKind::is_ball_ground_pair(*a, *b) {
            continue;
        }
        if let Some(final_score) = session.end_round() {
            info!(target: "session", "Game end!");
            info!(target: "session", "Final score: {final_score}");
            ended.write(RoundEnded { final_score });
        }
    }
}

/// Takes the ball out of the simulation once the round is over. It stays
/// visible where it landed.
pub fn freeze_ball_on_round_end(
    mut commands: Commands,
    mut ended: EventReader<RoundEnded>,
    balls: Query<Entity, With<Ball>>,
) {
    let Some(RoundEnded { final_score }) = ended.read().last().copied() else {
        return;
    };
    for e in &balls {
        commands.entity(e).insert(RigidBodyDisabled);
        debug!(target: "session", "ball {e:?} disabled at final score {final_score}");
    }
}
