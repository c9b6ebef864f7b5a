//! Command implementations

pub mod rotate;

pub use rotate::RotateArgs;
