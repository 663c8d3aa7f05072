use super::modes::DebugStats;
use bevy::prelude::*;

pub fn debug_stats_collect_system(time: Res<Time>, mut stats: ResMut<DebugStats>) {
    stats.record(time.delta_secs());
}
