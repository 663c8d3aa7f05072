use bevy::prelude::*;

/// A touch or left-click was released at this world-space position.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerReleased {
    pub world_pos: Vec2,
}

/// A tap landed on the ball and an impulse was queued.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BallKicked {
    pub impulse: Vec2,
    pub torque_impulse: f32,
    pub score: u32,
}

/// Ball touched the ground while the simulation was running.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnded {
    pub final_score: u32,
}

#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundRestarted;
