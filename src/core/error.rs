//! Errors raised while setting up a session.
//!
//! Play itself never fails: invalid selections are ignored and running
//! out of cards degrades to drawing fewer. Only construction can go wrong.

use thiserror::Error;

use crate::cards::StormCardId;

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max light strength must be positive (got {0})")]
    NonPositiveMaxStrength(i32),
    #[error("starting light strength {starting} must be between 1 and {max}")]
    StartingStrengthOutOfRange { starting: i32, max: i32 },
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("action deck needs at least one copy of each action")]
    NoActionCopies,
    #[error("storm deck of {requested} cards requested but only {available} available")]
    StormDeckTooLarge { requested: usize, available: usize },
    #[error("storm card {0} needs a positive threat and a non-negative reward")]
    InvalidStormCard(StormCardId),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Lookup failure against the storm card catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown storm card {0}")]
    UnknownStormCard(StormCardId),
}
