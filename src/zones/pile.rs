//! Ordered card piles.
//!
//! A `Pile` is a stack of cards: index 0 is the bottom, the last index
//! is the top. Draws take from the top, discards go on top.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// An ordered pile of cards.
///
/// ```
/// use lighthouse_keeper::zones::Pile;
///
/// let mut pile = Pile::from_vec(vec![1, 2, 3]);
/// assert_eq!(pile.top(), Some(&3));
/// assert_eq!(pile.draw(), Some(3));
///
/// pile.push(9);
/// assert_eq!(pile.as_slice(), &[1, 2, 9]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile<T> {
    cards: Vec<T>,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<T> Pile<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_vec(cards: Vec<T>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: T) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<T> {
        self.cards.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.cards.last()
    }

    /// Randomize the pile's order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove every card, bottom to top, leaving the pile empty.
    pub fn take_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.cards)
    }

    /// Keep only the top `len` cards.
    pub fn keep_top(&mut self, len: usize) {
        let excess = self.cards.len().saturating_sub(len);
        self.cards.drain(..excess);
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cards.iter()
    }
}

impl<T> Extend<T> for Pile<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
