pub mod audio;
pub mod flow;
pub mod spawn;
