pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{GameplayCorePlugin, GamePlugin};
pub use core::config::{GameConfig, SceneVariant, WindowConfig};
pub use core::components::{Ball, EntityKind};
pub use core::session::{GameSession, Phase, SimulationSpeed};
