pub mod components;
pub mod config;
pub mod events;
pub mod session;
pub mod system;
