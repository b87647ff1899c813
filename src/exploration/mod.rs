//! Exploration-side logic: the random encounter roll.

pub mod encounter;

pub use encounter::EncounterTrigger;
