//! Aftermath effect definitions.
//!
//! Every storm card carries exactly one `Aftermath`. It is plain data:
//! the kind of effect plus its parameters. `AftermathResolver` applies it.

use serde::{Deserialize, Serialize};

use crate::cards::CategorySet;

/// Side effect of a storm card, applied after the threat or reward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Aftermath {
    /// No special effect.
    #[default]
    None,

    /// Discard cards from the hand, most recently drawn first.
    /// Cards selected for this turn are spent anyway and are not picked.
    DiscardFromHand { count: u8 },

    /// Move cards from the top of the action deck to its discard pile.
    DiscardFromDeck { count: u8 },

    /// Lose light strength whatever the outcome.
    LoseStrength { amount: u8 },

    /// Ban categories from being played during the next round.
    DisableCategories { categories: CategorySet },

    /// Draw extra action cards into the hand.
    DrawCards { count: u8 },

    /// Gain light strength.
    RestoreStrength { amount: u8 },

    /// Raise light strength to its maximum.
    RestoreToMax,
}

impl std::fmt::Display for Aftermath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Aftermath::None => f.write_str("none"),
            Aftermath::DiscardFromHand { count } => write!(f, "discard {count} from hand"),
            Aftermath::DiscardFromDeck { count } => write!(f, "discard top {count} of action deck"),
            Aftermath::LoseStrength { amount } => write!(f, "lose {amount} strength"),
            Aftermath::DisableCategories { categories } => {
                f.write_str("disable ")?;
                for (i, category) in categories.iter().enumerate() {
                    if i > 0 {
                        f.write_str("/")?;
                    }
                    write!(f, "{category}")?;
                }
                f.write_str(" next round")
            }
            Aftermath::DrawCards { count } => write!(f, "draw {count}"),
            Aftermath::RestoreStrength { amount } => write!(f, "restore {amount} strength"),
            Aftermath::RestoreToMax => f.write_str("restore strength to max"),
        }
    }
}
