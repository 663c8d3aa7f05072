use bevy::prelude::*;

/// Marker component identifying the ball entity (holds physics body & collider).
#[derive(Component)]
pub struct Ball;

/// What a physics participant is, used to match contacts symmetrically.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ball,
    Wall,
    Ground,
}

impl EntityKind {
    /// True when the two kinds are the ball and the ground, in either order.
    pub fn is_ball_ground_pair(a: EntityKind, b: EntityKind) -> bool {
        matches!(
            (a, b),
            (EntityKind::Ball, EntityKind::Ground) | (EntityKind::Ground, EntityKind::Ball)
        )
    }
}

/// Final score text shown once the round has ended.
#[derive(Component)]
pub struct ScoreLabel;

/// The single start/restart button. Which one is shown follows the session phase.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[require(ButtonLatch)]
pub enum SceneButton {
    Start,
    Restart,
}

/// Remembers a press so scene buttons fire when the touch or click ends.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLatch {
    held: bool,
}

impl ButtonLatch {
    /// Feeds the latest interaction; true once a held press is let go.
    pub fn released(&mut self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::Pressed => {
                self.held = true;
                false
            }
            Interaction::Hovered | Interaction::None => std::mem::take(&mut self.held),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_ground_pair_is_symmetric() {
        assert!(EntityKind::is_ball_ground_pair(EntityKind::Ball, EntityKind::Ground));
        assert!(EntityKind::is_ball_ground_pair(EntityKind::Ground, EntityKind::Ball));
        assert!(!EntityKind::is_ball_ground_pair(EntityKind::Ball, EntityKind::Wall));
        assert!(!EntityKind::is_ball_ground_pair(EntityKind::Ground, EntityKind::Ground));
        assert!(!EntityKind::is_ball_ground_pair(EntityKind::Ball, EntityKind::Ball));
    }

    #[test]
    fn latch_fires_on_release_only() {
        let mut latch = ButtonLatch::default();
        assert!(!latch.released(Interaction::Hovered));
        assert!(!latch.released(Interaction::Pressed));
        assert!(latch.released(Interaction::Hovered));
        assert!(!latch.released(Interaction::None));
        latch.released(Interaction::Pressed);
        assert!(latch.released(Interaction::None));
    }
}
