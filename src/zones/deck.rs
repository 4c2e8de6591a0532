//! The action deck and its discard pile.
//!
//! Drawing from an empty deck recycles the discard pile: it is shuffled
//! and becomes the new deck. Recycling is reported to the caller so the
//! resolver can surface it.

use serde::{Deserialize, Serialize};

use super::pile::Pile;
use crate::cards::ActionCard;
use crate::core::GameRng;

/// Cards drawn by a single [`ActionDeck::draw`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draw {
    pub cards: Vec<ActionCard>,
    /// Whether the discard pile was recycled into the deck.
    pub reshuffled: bool,
}

/// Draw pile plus discard pile for action cards.
///
/// The number of cards across both piles only changes when cards are
/// drawn out of or discarded into it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionDeck {
    draw: Pile<ActionCard>,
    discard: Pile<ActionCard>,
}

impl ActionDeck {
    /// Create a deck from cards listed bottom to top, with an empty discard.
    #[must_use]
    pub fn new(cards: Vec<ActionCard>) -> Self {
        Self {
            draw: Pile::from_vec(cards),
            discard: Pile::new(),
        }
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards across deck and discard.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    /// Draw pile, bottom to top.
    #[must_use]
    pub fn deck_cards(&self) -> &[ActionCard] {
        self.draw.as_slice()
    }

    /// Discard pile, bottom to top.
    #[must_use]
    pub fn discard_cards(&self) -> &[ActionCard] {
        self.discard.as_slice()
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.draw.shuffle(rng);
    }

    /// Shuffle the discard pile into an empty deck.
    ///
    /// Returns `false` (and does nothing) if the deck still has cards or
    /// there is nothing to recycle.
    pub fn recycle(&mut self, rng: &mut GameRng) -> bool {
        if !self.draw.is_empty() || self.discard.is_empty() {
            return false;
        }
        self.draw = Pile::from_vec(self.discard.take_all());
        self.draw.shuffle(rng);
        log::debug!("recycled {} discarded action cards into the deck", self.draw.len());
        true
    }

    /// Draw up to `count` cards, recycling the discard pile when the deck
    /// runs out. Draws fewer (possibly zero) when both piles are empty.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> Draw {
        let mut drawn = Draw::default();

        for _ in 0..count {
            if self.draw.is_empty() {
                if !self.recycle(rng) {
                    log::debug!("no action cards left to draw");
                    break;
                }
                drawn.reshuffled = true;
            }
            if let Some(card) = self.draw.draw() {
                drawn.cards.push(card);
            }
        }

        drawn
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: ActionCard) {
        self.discard.push(card);
    }

    /// Move up to `count` cards from the top of the deck onto the discard
    /// pile. Never recycles; an empty deck makes this a no-op.
    pub fn discard_top(&mut self, count: usize) -> Vec<ActionCard> {
        let mut moved = Vec::new();
        for _ in 0..count {
            let Some(card) = self.draw.draw() else {
                break;
            };
            self.discard.push(card);
            moved.push(card);
        }
        moved
    }
}
