pub mod input;
pub mod session;
pub mod tap_kick;
