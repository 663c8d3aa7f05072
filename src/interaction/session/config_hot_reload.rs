use bevy::prelude::*;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::core::config::{ConfigOverrides, GameConfig};

/// Files polled for changes, in layering order.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Re-reads the layered config when any source file changes. Tuning read
/// every frame (gravity, kick force, damping, sound volume) applies at once;
/// settings baked in at startup are held, see `keep_spawned_settings`.
pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Startup, seed_modification_times)
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Files as loaded at startup are the baseline; only later edits reload.
fn seed_modification_times(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    for path in &settings.paths {
        if let Some(t) = modified(path) {
            state.last_mod.insert(path.clone(), t);
        }
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    overrides: Option<Res<ConfigOverrides>>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let mut dirty = false;
    for path in &settings.paths {
        let Some(mod_time) = modified(path) else {
            continue;
        };
        let entry = state
            .last_mod
            .entry(path.clone())
            .or_insert(SystemTime::UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    if !dirty {
        return;
    }
    let existing = settings.paths.iter().filter(|p| p.exists());
    let (mut new_cfg, _used, errors) = GameConfig::load_layered(existing);
    if let Some(o) = overrides.as_deref() {
        o.apply(&mut new_cfg);
    }
    for e in errors {
        warn!(target: "config", "hot-reload issue: {e}");
    }
    let held = keep_spawned_settings(&cfg_res, &mut new_cfg);
    if !held.is_empty() {
        warn!(
            target: "config",
            "hot-reload ignored {}; restart the program to apply",
            held.join(", ")
        );
    }
    if *cfg_res == new_cfg {
        return;
    }
    info!(target: "config", "config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    *cfg_res = new_cfg;
}

/// Settings baked into entities and plugins at startup (ball collider and
/// sprite, arena colliders, locked axes, asset handles, window size, physics
/// scale) keep their current values. Returns the names of the sections whose
/// edits were dropped.
fn keep_spawned_settings(current: &GameConfig, reloaded: &mut GameConfig) -> Vec<&'static str> {
    let mut held = Vec::new();
    if reloaded.ball != current.ball {
        reloaded.ball = current.ball.clone();
        held.push("ball");
    }
    if reloaded.arena != current.arena {
        reloaded.arena = current.arena.clone();
        held.push("arena");
    }
    if reloaded.variant != current.variant {
        reloaded.variant = current.variant;
        held.push("variant");
    }
    if reloaded.assets != current.assets {
        reloaded.assets = current.assets.clone();
        held.push("assets");
    }
    if reloaded.physics.pixels_per_meter != current.physics.pixels_per_meter {
        reloaded.physics.pixels_per_meter = current.physics.pixels_per_meter;
        held.push("physics.pixels_per_meter");
    }
    if reloaded.window.width != current.window.width || reloaded.window.height != current.window.height {
        reloaded.window.width = current.window.width;
        reloaded.window.height = current.window.height;
        held.push("window size");
    }
    held
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SceneVariant;
    use bevy::time::TimeUpdateStrategy;
    use std::fs;
    use std::time::Duration;

    fn reload_app(path: PathBuf) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(GameConfig::default())
            .insert_resource(ConfigReloadSettings {
                paths: vec![path],
                interval_secs: 0.05,
            })
            .add_plugins(ConfigHotReloadPlugin);
        app.update();
        app
    }

    fn rewrite(path: &Path, contents: &str) {
        fs::write(path, contents).unwrap();
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(SystemTime::now() + Duration::from_secs(10))
            .unwrap();
    }

    #[test]
    fn tuning_edits_apply_but_spawned_geometry_stays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");
        fs::write(&path, "(kick: (force: 10000.0))").unwrap();
        let mut app = reload_app(path.clone());

        rewrite(
            &path,
            r#"(
                variant: "spin",
                window: (width: 800.0, title: "Tuned"),
                ball: (radius: 24.0),
                kick: (force: 500.0, horizontal_damping: 0.2),
                physics: (gravity_y: -200.0),
            )"#,
        );
        for _ in 0..4 {
            app.update();
        }

        let cfg = app.world().resource::<GameConfig>();
        assert_eq!(cfg.kick.force, 500.0);
        assert_eq!(cfg.kick.horizontal_damping, 0.2);
        assert_eq!(cfg.physics.gravity_y, -200.0);
        assert_eq!(cfg.window.title, "Tuned");
        assert_eq!(cfg.ball.radius, 12.0);
        assert_eq!(cfg.variant, SceneVariant::Classic);
        assert_eq!(cfg.window.width, 480.0);
    }

    #[test]
    fn unchanged_files_do_not_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");
        fs::write(&path, "(kick: (force: 500.0))").unwrap();
        let mut app = reload_app(path);
        for _ in 0..4 {
            app.update();
        }
        // Seeded at startup, so the file on disk never replaced the live config.
        assert_eq!(app.world().resource::<GameConfig>().kick.force, 10000.0);
    }

    #[test]
    fn held_sections_are_reported() {
        let current = GameConfig::default();
        let mut reloaded = GameConfig::default();
        reloaded.ball.radius = 24.0;
        reloaded.variant = SceneVariant::Spin;
        reloaded.kick.force = 1.0;
        let held = keep_spawned_settings(&current, &mut reloaded);
        assert_eq!(held, vec!["ball", "variant"]);
        assert_eq!(reloaded.ball, current.ball);
        assert_eq!(reloaded.kick.force, 1.0);
    }
}
