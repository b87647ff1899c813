//! Shared constants, tuning config and errors.

pub mod config;
pub mod constants;
pub mod error;

pub use config::GameConfig;
pub use constants::*;
pub use error::{GameError, Result};
