//! Round state: score, phase and the global simulation speed.
//!
//! Transitions are plain methods so systems (and tests) drive the state
//! machine without touching the ECS:
//!
//! ```text
//! Waiting --press_start--> Running --end_round--> Ended --restart--> Running
//! ```
use bevy::prelude::*;

/// Global physics speed. `Paused` freezes every body and makes the contact
/// handler ignore events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimulationSpeed {
    #[default]
    Paused,
    Running,
}

impl SimulationSpeed {
    pub fn is_running(self) -> bool {
        matches!(self, SimulationSpeed::Running)
    }
    /// Numeric scale as seen by the physics step (0 = frozen, 1 = normal).
    pub fn scale(self) -> f32 {
        match self {
            SimulationSpeed::Paused => 0.0,
            SimulationSpeed::Running => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Scene built, physics paused, start button shown.
    #[default]
    Waiting,
    Running,
    /// Ball touched the ground; final score and restart button shown.
    Ended,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    score: u32,
    phase: Phase,
    speed: SimulationSpeed,
}

impl GameSession {
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn speed(&self) -> SimulationSpeed {
        self.speed
    }
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Start button handler. Only valid while waiting; returns whether the
    /// session changed.
    pub fn press_start(&mut self) -> bool {
        if self.phase != Phase::Waiting {
            return false;
        }
        self.phase = Phase::Running;
        self.speed = SimulationSpeed::Running;
        true
    }

    /// Counts one kick. Ignored unless the round is running.
    pub fn record_kick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.score += 1;
        true
    }

    /// Ball reached the ground. Returns the final score the first time;
    /// once the simulation is paused further calls are no-ops.
    pub fn end_round(&mut self) -> Option<u32> {
        if !self.speed.is_running() {
            return None;
        }
        self.speed = SimulationSpeed::Paused;
        self.phase = Phase::Ended;
        Some(self.score)
    }

    /// Restart button handler. Only valid after a round ended.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::Ended {
            return false;
        }
        self.score = 0;
        self.phase = Phase::Running;
        self.speed = SimulationSpeed::Running;
        true
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}
