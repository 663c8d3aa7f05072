use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
            title: "Kickup".into(),
            auto_close: 0.0,
        }
    }
}

/// Which of the two scene behaviours is active.
///
/// `Classic` kicks through the ball's center with rotation locked and always
/// plays the kick sound. `Spin` applies the kick at an offset (the ball
/// spins), gates the sound on the overlay toggle and enables the key layer.
///
/// Written as a string in RON (`variant: "spin"`) so it survives layered merging.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum SceneVariant {
    #[default]
    Classic,
    Spin,
}

impl TryFrom<String> for SceneVariant {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for SceneVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(SceneVariant::Classic),
            "spin" => Ok(SceneVariant::Spin),
            other => Err(format!("unknown scene variant '{other}' (expected classic|spin)")),
        }
    }
}

impl SceneVariant {
    pub fn rotation_enabled(self) -> bool {
        matches!(self, SceneVariant::Spin)
    }
    pub fn sound_gated(self) -> bool {
        matches!(self, SceneVariant::Spin)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity_y: f32,
    pub pixels_per_meter: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -98.0,
            pixels_per_meter: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    /// Horizontal inset of the side walls from the window edges. Compensates
    /// for the reported window size being larger than the visible area.
    pub wall_inset: f32,
    /// Wall height as a multiple of the window height.
    pub wall_height_factor: f32,
    pub wall_thickness: f32,
    pub ground_thickness: f32,
    pub background_scale: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            wall_inset: 20.0,
            wall_height_factor: 3.0,
            wall_thickness: 1.0,
            ground_thickness: 3.0,
            background_scale: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub scale: f32,
    pub density: f32,
    pub restitution: f32,
    pub friction: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            scale: 1.0,
            density: 0.1,
            restitution: 0.5,
            friction: 0.5,
        }
    }
}
impl BallConfig {
    /// Radius as rendered and as seen by the collider.
    pub fn effective_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct KickConfig {
    pub force: f32,
    /// Factor applied to the horizontal velocity before each kick.
    pub horizontal_damping: f32,
    pub volume: f32,
    pub pitch: f32,
}
impl Default for KickConfig {
    fn default() -> Self {
        Self {
            force: 10_000.0,
            horizontal_damping: 0.5,
            volume: 1.0,
            pitch: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HudConfig {
    pub font_size: f32,
    /// Score label height measured from the bottom, as a fraction of the window height.
    pub label_height_fraction: f32,
    /// Vertical offset of the start/restart button from the screen center (y up).
    pub button_offset_y: f32,
    pub button_width: f32,
    pub button_height: f32,
}
impl Default for HudConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            label_height_fraction: 0.75,
            button_offset_y: -50.0,
            button_width: 120.0,
            button_height: 48.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OverlayDefaults {
    pub sound: bool,
    pub debug_draw: bool,
    pub stats: bool,
}
impl Default for OverlayDefaults {
    fn default() -> Self {
        Self {
            sound: true,
            debug_draw: false,
            stats: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub ball: String,
    pub button: String,
    pub kick_sound: String,
}
impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "textures/grass_and_sky.png".into(),
            ball: "textures/soccer_ball.png".into(),
            button: "textures/start_button.png".into(),
            kick_sound: "sounds/ball_kick.wav".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub variant: SceneVariant,
    /// Enables the sound/debug-draw/stats key layer. The quit key is always active.
    pub debug_keys: Option<bool>,
    pub physics: PhysicsConfig,
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub kick: KickConfig,
    pub hud: HudConfig,
    pub overlay: OverlayDefaults,
    pub assets: AssetPaths,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            variant: SceneVariant::default(),
            debug_keys: None,
            physics: Default::default(),
            arena: Default::default(),
            ball: Default::default(),
            kick: Default::default(),
            hud: Default::default(),
            overlay: Default::default(),
            assets: Default::default(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    /// Loads every readable file in order and deep-merges them, later files
    /// overriding earlier ones. Returns the config, the paths that were used
    /// and any problems encountered (unreadable or unparsable files).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            merge_value(ev, v);
                            continue;
                        }
                        bm.insert(k, v);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Whether the sound/debug/stats key layer is active. Defaults to on for
    /// the `Spin` scene and off for `Classic` unless set explicitly.
    pub fn debug_keys_enabled(&self) -> bool {
        self.debug_keys
            .unwrap_or(matches!(self.variant, SceneVariant::Spin))
    }

    /// World-space start point of the ball: top-center of the window.
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(0.0, self.window.height * 0.5)
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.physics.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); the ball will never reach the ground",
                self.physics.gravity_y
            ));
        } else if self.physics.gravity_y.abs() < 1e-4 {
            w.push("physics.gravity_y magnitude near zero; the ball floats".into());
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if self.ball.scale <= 0.0 {
            w.push("ball.scale must be > 0 (kick strength divides by it)".into());
        }
        if self.ball.density <= 0.0 {
            w.push("ball.density must be > 0".into());
        }
        if !(0.0..=1.5).contains(&self.ball.restitution) {
            w.push(format!(
                "ball.restitution {} outside recommended 0..1.5",
                self.ball.restitution
            ));
        }
        if self.kick.force <= 0.0 {
            w.push("kick.force must be > 0".into());
        }
        if !(0.0..=1.0).contains(&self.kick.horizontal_damping) {
            w.push(format!(
                "kick.horizontal_damping {} outside 0..1",
                self.kick.horizontal_damping
            ));
        }
        if self.arena.wall_inset * 2.0 + self.ball.effective_radius() * 2.0 >= self.window.width {
            w.push(format!(
                "arena.wall_inset {} leaves no room for the ball",
                self.arena.wall_inset
            ));
        }
        if self.arena.wall_height_factor < 1.0 {
            w.push(format!(
                "arena.wall_height_factor {} < 1; the ball can leave the pit",
                self.arena.wall_height_factor
            ));
        }
        w
    }
}

/// Command-line settings that win over every config file, including on
/// hot reload.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub variant: Option<SceneVariant>,
    pub auto_close: Option<f32>,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut GameConfig) {
        if let Some(v) = self.variant {
            cfg.variant = v;
        }
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.ball.radius, 12.0);
        assert_eq!(cfg.ball.scale, 1.0);
        assert_eq!(cfg.kick.force, 10_000.0);
        assert_eq!(cfg.physics.gravity_y, -98.0);
        assert_eq!(cfg.arena.wall_inset, 20.0);
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: GameConfig = ron::from_str(r#"(variant: "spin", kick: (force: 500.0))"#).unwrap();
        assert_eq!(cfg.variant, SceneVariant::Spin);
        assert_eq!(cfg.kick.force, 500.0);
        assert_eq!(cfg.kick.horizontal_damping, 0.5);
        assert_eq!(cfg.window.width, 480.0);
    }

    #[test]
    fn debug_keys_follow_variant_unless_set() {
        let mut cfg = GameConfig::default();
        assert!(!cfg.debug_keys_enabled());
        cfg.variant = SceneVariant::Spin;
        assert!(cfg.debug_keys_enabled());
        cfg.debug_keys = Some(false);
        assert!(!cfg.debug_keys_enabled());
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let res: Result<GameConfig, _> = ron::from_str(r#"(variant: "wobble")"#);
        assert!(res.is_err());
    }

    #[test]
    fn validate_flags_bad_tuning() {
        let mut cfg = GameConfig::default();
        cfg.ball.scale = 0.0;
        cfg.physics.gravity_y = 10.0;
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("ball.scale")));
        assert!(warnings.iter().any(|w| w.contains("gravity_y is positive")));
    }

    #[test]
    fn overrides_win() {
        let mut cfg = GameConfig::default();
        let o = ConfigOverrides {
            variant: Some(SceneVariant::Spin),
            auto_close: None,
        };
        o.apply(&mut cfg);
        assert_eq!(cfg.variant, SceneVariant::Spin);
        assert_eq!(cfg.window.auto_close, 0.0);
    }

    #[test]
    fn ball_starts_top_center() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.ball_start(), Vec2::new(0.0, 160.0));
    }
}
