pub mod config;
pub mod report;

pub use config::{
    ArenaConfig, AssetPaths, BallConfig, ConfigOverrides, GameConfig, HudConfig, KickConfig, OverlayDefaults,
    PhysicsConfig, SceneVariant, WindowConfig,
};
pub use report::{log_config_report, ConfigLoadReport};
