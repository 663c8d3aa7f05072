use bevy::prelude::*;

use crate::core::config::OverlayDefaults;

/// Runtime presentation toggles flipped by the key layer.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayToggles {
    pub sound: bool,
    pub debug_draw: bool,
    pub stats: bool,
}

impl Default for OverlayToggles {
    fn default() -> Self {
        Self::from(&OverlayDefaults::default())
    }
}

impl From<&OverlayDefaults> for OverlayToggles {
    fn from(d: &OverlayDefaults) -> Self {
        Self {
            sound: d.sound,
            debug_draw: d.debug_draw,
            stats: d.stats,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct DebugStats {
    pub frame_counter: u64,
    pub fps: f32,
    pub frame_time_ms: f32,
    pub log_interval: f32,
    pub time_accum: f32,
}

impl Default for DebugStats {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            fps: 0.0,
            frame_time_ms: 0.0,
            log_interval: 1.0,
            time_accum: 0.0,
        }
    }
}

impl DebugStats {
    /// Exponential moving average over frame deltas.
    pub fn record(&mut self, dt: f32) {
        self.frame_counter += 1;
        let dt = dt.max(1e-6);
        let inst_fps = 1.0 / dt;
        let inst_ms = dt * 1000.0;
        if self.fps == 0.0 {
            self.fps = inst_fps;
            self.frame_time_ms = inst_ms;
        } else {
            self.fps = self.fps * 0.9 + inst_fps * 0.1;
            self.frame_time_ms = self.frame_time_ms * 0.9 + inst_ms * 0.1;
        }
    }
}
