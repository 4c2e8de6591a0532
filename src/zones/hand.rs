//! The keeper's hand and the selection for the current turn.
//!
//! The selection is always a subset of the hand. Selecting a card does
//! not move it: cards leave the hand only when a turn is resolved.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionCard, ActionCardId, CategorySet};

/// Cards held by the keeper plus the ordered selection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<ActionCard>,
    selection: Vec<ActionCardId>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the order they were drawn.
    #[must_use]
    pub fn cards(&self) -> &[ActionCard] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, id: ActionCardId) -> Option<&ActionCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ActionCardId) -> bool {
        self.get(id).is_some()
    }

    /// Add a card to the end of the hand.
    pub fn push(&mut self, card: ActionCard) {
        self.cards.push(card);
    }

    // === Selection ===

    /// Selected card ids, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[ActionCardId] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: ActionCardId) -> bool {
        self.selection.contains(&id)
    }

    /// Selected cards, in selection order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<ActionCard> {
        self.selection
            .iter()
            .filter_map(|&id| self.get(id).copied())
            .collect()
    }

    /// Select or deselect a card.
    ///
    /// Returns `true` if the selection changed. Ids not in the hand are
    /// ignored, as are attempts to select a card whose category is banned.
    pub fn toggle_select(&mut self, id: ActionCardId, banned: CategorySet) -> bool {
        if let Some(pos) = self.selection.iter().position(|&s| s == id) {
            self.selection.remove(pos);
            return true;
        }
        let allowed = self
            .get(id)
            .is_some_and(|card| !banned.contains(card.category()));
        if allowed {
            self.selection.push(id);
        }
        allowed
    }

    /// Replace the selection with `ids`, keeping only cards in the hand
    /// whose category is not banned. Duplicates are dropped.
    pub fn set_selection(&mut self, ids: &[ActionCardId], banned: CategorySet) {
        self.selection.clear();
        for &id in ids {
            if !self.is_selected(id) {
                self.toggle_select(id, banned);
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Remove the selected cards from the hand and clear the selection.
    pub fn take_selected(&mut self) -> Vec<ActionCard> {
        let selection = std::mem::take(&mut self.selection);
        let mut taken = Vec::with_capacity(selection.len());
        for id in selection {
            if let Some(pos) = self.cards.iter().position(|c| c.id == id) {
                taken.push(self.cards.remove(pos));
            }
        }
        taken
    }

    /// Remove up to `count` unselected cards, most recently drawn first.
    pub fn discard_unselected(&mut self, count: usize) -> Vec<ActionCard> {
        let mut removed = Vec::new();
        while removed.len() < count {
            let Some(pos) = self.cards.iter().rposition(|c| !self.selection.contains(&c.id)) else {
                break;
            };
            removed.push(self.cards.remove(pos));
        }
        removed
    }
}

impl Extend<ActionCard> for Hand {
    fn extend<I: IntoIterator<Item = ActionCard>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
