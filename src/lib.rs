//! Maze Battle - turn-based encounters for a maze crawler.
//!
//! The library holds the game core: progression, the encounter roll, the
//! combat state machine and the session that switches between them. The
//! terminal front end lives in the binary.

pub mod combat;
pub mod core;
pub mod exploration;
pub mod progression;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::{GameConfig, GameError};
pub use combat::{CombatAction, CombatEvent, CombatStateMachine, TurnState};
pub use progression::{PlayerProgression, Position, ProgressionStore, StatsSummary};
pub use session::{Mode, ModeTransition, Session};
