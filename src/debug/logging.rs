use super::modes::{DebugStats, OverlayToggles};
use crate::core::session::GameSession;
use bevy::prelude::*;

/// Periodic one-line summary while the stats overlay is on.
pub fn debug_logging_system(
    time: Res<Time>,
    toggles: Res<OverlayToggles>,
    session: Res<GameSession>,
    mut stats: ResMut<DebugStats>,
) {
    if !toggles.stats {
        return;
    }
    stats.time_accum += time.delta_secs();
    if stats.time_accum >= stats.log_interval {
        stats.time_accum = 0.0;
        info!(
            "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} score={} phase={:?} speed={}",
            stats.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            session.score(),
            session.phase(),
            session.speed().scale()
        );
    }
}
