//! Results of resolving a turn.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionCardId, StormCardId};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The storm deck ran out with the light still burning.
    Victory,
    /// Light strength reached zero.
    Defeat,
}

impl GameResult {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, GameResult::Victory)
    }

    /// Title shown when the game ends.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            GameResult::Victory => "You survived the storm!",
            GameResult::Defeat => "The light has gone out...",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            GameResult::Victory => {
                "The light is safe, and dawn is breaking. Well done, Lighthouse Keeper!"
            }
            GameResult::Defeat => "The storm was too mighty. Darkness has won this time.",
        }
    }
}

/// Whether a session still accepts turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    InProgress,
    Over(GameResult),
}

impl SessionStatus {
    #[must_use]
    pub const fn result(self) -> Option<GameResult> {
        match self {
            SessionStatus::InProgress => None,
            SessionStatus::Over(result) => Some(result),
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, SessionStatus::Over(_))
    }
}

/// Everything one call to `resolve_turn` changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Storm card that was resolved; `None` if the game was already over.
    pub storm_card: Option<StormCardId>,
    /// Whether the played cards met the requirement.
    pub success: bool,
    pub light_strength_delta: i32,
    pub new_light_strength: i32,
    /// Cards moved to the action discard pile, played cards first.
    pub cards_discarded: Vec<ActionCardId>,
    /// Cards drawn into the hand, aftermath draws first.
    pub cards_drawn: Vec<ActionCardId>,
    /// Whether the action discard pile was recycled into the deck.
    pub reshuffled: bool,
    /// Set when this turn ended the game (or it had already ended).
    pub terminal: Option<GameResult>,
}
