//! Tap-to-impulse mapping.
//!
//! The impulse points from the tap toward the ball center and grows with the
//! tap's distance from the center relative to the ball's rendered radius:
//! `force * dist / (scale * radius)`.
use bevy::prelude::*;

use crate::core::config::SceneVariant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kick {
    pub impulse: Vec2,
    /// Non-zero only when the impulse is applied off-center (`Spin`).
    pub torque_impulse: f32,
}

/// Axis-aligned box a tap must land in to count as hitting the ball.
pub fn ball_bounds(center: Vec2, radius: f32, scale: f32) -> Rect {
    Rect::from_center_half_size(center, Vec2::splat(radius * scale))
}

pub fn compute_kick(
    ball: Vec2,
    tap: Vec2,
    radius: f32,
    scale: f32,
    force: f32,
    variant: SceneVariant,
) -> Kick {
    let to_center = ball - tap;
    let multiplier = to_center.length() / (scale * radius);
    let impulse = to_center.normalize_or_zero() * force * multiplier;
    let torque_impulse = match variant {
        SceneVariant::Classic => 0.0,
        SceneVariant::Spin => {
            // Applied at half the horizontal tap offset, relative to the center.
            let offset = Vec2::new((tap.x - ball.x) * 0.5, 0.0);
            offset.perp_dot(impulse)
        }
    };
    Kick {
        impulse,
        torque_impulse,
    }
}

/// Velocity the ball keeps right before a kick lands: horizontal motion
/// damped, vertical motion cancelled.
pub fn damp_before_kick(linvel: Vec2, horizontal_damping: f32) -> Vec2 {
    Vec2::new(linvel.x * horizontal_damping, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn impulse_scales_with_distance_over_radius() {
        let ball = Vec2::new(100.0, 200.0);
        let tap = ball - Vec2::new(0.0, 24.0);
        let kick = compute_kick(ball, tap, 12.0, 1.0, 10_000.0, SceneVariant::Classic);
        assert!((kick.impulse.length() - 20_000.0).abs() < EPS);
        assert!(kick.impulse.x.abs() < EPS && kick.impulse.y > 0.0);
        assert_eq!(kick.torque_impulse, 0.0);
    }

    #[test]
    fn larger_rendered_ball_needs_farther_taps() {
        let ball = Vec2::ZERO;
        let tap = Vec2::new(-12.0, 0.0);
        let small = compute_kick(ball, tap, 12.0, 1.0, 10_000.0, SceneVariant::Classic);
        let big = compute_kick(ball, tap, 12.0, 2.0, 10_000.0, SceneVariant::Classic);
        assert!((small.impulse.x - 10_000.0).abs() < EPS);
        assert!((big.impulse.x - 5_000.0).abs() < EPS);
    }

    #[test]
    fn tap_on_center_gives_no_impulse() {
        let kick = compute_kick(Vec2::ONE, Vec2::ONE, 12.0, 1.0, 10_000.0, SceneVariant::Spin);
        assert_eq!(kick.impulse, Vec2::ZERO);
        assert_eq!(kick.torque_impulse, 0.0);
        assert!(!kick.impulse.is_nan());
    }

    #[test]
    fn offset_kick_spins_the_ball() {
        // Tap lower-right: pushed up-left, applied right of center -> counter-clockwise.
        let kick = compute_kick(Vec2::ZERO, Vec2::new(6.0, -6.0), 12.0, 1.0, 10_000.0, SceneVariant::Spin);
        assert!(kick.impulse.x < 0.0 && kick.impulse.y > 0.0);
        assert!(kick.torque_impulse > 0.0);
        let mirrored = compute_kick(Vec2::ZERO, Vec2::new(-6.0, -6.0), 12.0, 1.0, 10_000.0, SceneVariant::Spin);
        assert!((mirrored.torque_impulse + kick.torque_impulse).abs() < EPS);
    }

    #[test]
    fn bounds_follow_scale() {
        let r = ball_bounds(Vec2::ZERO, 12.0, 1.0);
        assert!(r.contains(Vec2::new(12.0, -12.0)));
        assert!(!r.contains(Vec2::new(12.5, 0.0)));
        let r2 = ball_bounds(Vec2::ZERO, 12.0, 2.0);
        assert!(r2.contains(Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn damping_halves_horizontal_and_drops_vertical() {
        assert_eq!(damp_before_kick(Vec2::new(40.0, -300.0), 0.5), Vec2::new(20.0, 0.0));
    }
}
