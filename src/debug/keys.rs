use bevy::prelude::*;

use super::modes::OverlayToggles;
use crate::core::config::GameConfig;

const LOG_TARGET: &str = "overlay";

fn on_off(v: bool) -> &'static str {
    if v {
        "enabled"
    } else {
        "disabled"
    }
}

/// Q quits in every variant. S/D/F flip sound, physics debug draw and the
/// stats overlay when the key layer is enabled.
pub fn overlay_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut toggles: ResMut<OverlayToggles>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::KeyQ) {
        info!(target: LOG_TARGET, "quit requested");
        exit.write(AppExit::Success);
        return;
    }
    if !cfg.debug_keys_enabled() {
        return;
    }
    if keys.just_pressed(KeyCode::KeyS) {
        toggles.sound = !toggles.sound;
        info!(target: LOG_TARGET, "sound {}", on_off(toggles.sound));
    }
    if keys.just_pressed(KeyCode::KeyD) {
        toggles.debug_draw = !toggles.debug_draw;
        info!(target: LOG_TARGET, "physics debug draw {}", on_off(toggles.debug_draw));
    }
    if keys.just_pressed(KeyCode::KeyF) {
        toggles.stats = !toggles.stats;
        info!(target: LOG_TARGET, "stats overlay {}", on_off(toggles.stats));
    }
}
