//! Session configuration.
//!
//! `SessionConfig` carries the tunable numbers of a game. The defaults
//! are the values the standard game is balanced around.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Light strength a new game starts with.
pub const DEFAULT_STARTING_STRENGTH: i32 = 10;

/// Upper bound of light strength.
pub const DEFAULT_MAX_STRENGTH: i32 = 10;

/// Number of cards the hand is replenished to after each turn.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Number of storm cards dealt from the catalog into a game.
pub const DEFAULT_STORM_DECK_SIZE: usize = 20;

/// Copies of each action kind in the standard action deck.
pub const DEFAULT_COPIES_PER_ACTION: usize = 5;

/// Numbers that shape a game session.
///
/// ```
/// use lighthouse_keeper::core::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_storm_deck_size(10)
///     .with_starting_strength(6);
///
/// assert!(config.validate(102).is_ok());
/// assert_eq!(config.hand_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Light strength at the start of the game.
    pub starting_strength: i32,

    /// Inclusive upper bound for light strength.
    pub max_strength: i32,

    /// Hand size the player is replenished to.
    pub hand_size: usize,

    /// How many storm cards make up the storm deck.
    pub storm_deck_size: usize,

    /// Copies of each action kind in a generated action deck.
    pub copies_per_action: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_strength: DEFAULT_STARTING_STRENGTH,
            max_strength: DEFAULT_MAX_STRENGTH,
            hand_size: DEFAULT_HAND_SIZE,
            storm_deck_size: DEFAULT_STORM_DECK_SIZE,
            copies_per_action: DEFAULT_COPIES_PER_ACTION,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_starting_strength(mut self, strength: i32) -> Self {
        self.starting_strength = strength;
        self
    }

    #[must_use]
    pub fn with_max_strength(mut self, max: i32) -> Self {
        self.max_strength = max;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_storm_deck_size(mut self, size: usize) -> Self {
        self.storm_deck_size = size;
        self
    }

    #[must_use]
    pub fn with_copies_per_action(mut self, copies: usize) -> Self {
        self.copies_per_action = copies;
        self
    }

    /// Check the configuration against the number of storm cards available.
    pub fn validate(&self, available_storm_cards: usize) -> Result<(), ConfigError> {
        if self.max_strength <= 0 {
            return Err(ConfigError::NonPositiveMaxStrength(self.max_strength));
        }
        if !(1..=self.max_strength).contains(&self.starting_strength) {
            return Err(ConfigError::StartingStrengthOutOfRange {
                starting: self.starting_strength,
                max: self.max_strength,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.copies_per_action == 0 {
            return Err(ConfigError::NoActionCopies);
        }
        if self.storm_deck_size > available_storm_cards {
            return Err(ConfigError::StormDeckTooLarge {
                requested: self.storm_deck_size,
                available: available_storm_cards,
            });
        }
        Ok(())
    }
}
