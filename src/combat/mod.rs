//! Turn-based combat: types and the battle state machine.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
