//! Debug layer: overlay toggles (sound, physics debug draw, stats), the key
//! bindings that flip them, and the stats overlay itself.

pub mod keys; // pub for testing
mod logging;
mod modes;
mod overlay;
mod stats;

pub use modes::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{InputSet, PresentationSet};
use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::overlay_key_input_system;
        use logging::debug_logging_system;
        use overlay::{debug_overlay_spawn, debug_overlay_update};
        use stats::debug_stats_collect_system;

        if !app.world().contains_resource::<OverlayToggles>() {
            let toggles = app
                .world()
                .get_resource::<GameConfig>()
                .map(|c| OverlayToggles::from(&c.overlay))
                .unwrap_or_default();
            app.insert_resource(toggles);
        }

        app.init_resource::<DebugStats>()
            .add_systems(Startup, debug_overlay_spawn)
            .add_systems(Update, overlay_key_input_system.in_set(InputSet))
            .add_systems(
                Update,
                (
                    debug_stats_collect_system,
                    apply_debug_draw,
                    debug_logging_system,
                    debug_overlay_update,
                )
                    .chain()
                    .in_set(PresentationSet),
            );
    }
}

/// Pushes the debug-draw toggle into Rapier's debug renderer (if installed).
fn apply_debug_draw(toggles: Res<OverlayToggles>, ctx: Option<ResMut<DebugRenderContext>>) {
    if let Some(mut c) = ctx {
        if c.enabled != toggles.debug_draw {
            c.enabled = toggles.debug_draw;
        }
    }
}
