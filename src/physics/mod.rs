pub mod contact;
pub mod kick;
pub mod rapier;
