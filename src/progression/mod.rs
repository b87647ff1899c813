//! Persistent player progression carried across exploration and combat.

pub mod store;
pub mod types;

pub use store::ProgressionStore;
pub use types::*;
