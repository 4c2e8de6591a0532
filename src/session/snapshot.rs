//! Read-only view of a session for renderers.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionCard, ActionCardId, CategorySet, StormCard};
use crate::rules::SessionStatus;

/// Strength at or below which the light is considered low.
pub const LOW_LIGHT_THRESHOLD: i32 = 3;

/// Everything a renderer needs to redraw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub light_strength: i32,
    pub max_light_strength: i32,
    pub hand: Vec<ActionCard>,
    pub selection: Vec<ActionCardId>,
    pub action_deck_count: usize,
    pub action_discard_count: usize,
    pub storm_deck_count: usize,
    pub storm_discard_count: usize,
    pub active_storm_card: Option<StormCard>,
    /// Categories that cannot be played this round.
    pub restricted_categories: CategorySet,
    pub status: SessionStatus,
    pub turn: u32,
}

impl SessionSnapshot {
    /// The light is close to going out.
    #[must_use]
    pub fn is_low_light(&self) -> bool {
        self.light_strength <= LOW_LIGHT_THRESHOLD
    }
}
