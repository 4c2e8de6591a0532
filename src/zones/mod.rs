//! Card locations: piles, the action deck and the hand.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered stack, top is the last element
//! - `ActionDeck`: Draw pile and discard pile with recycling
//! - `Hand`: Held cards plus the turn's selection

pub mod deck;
pub mod hand;
pub mod pile;

pub use deck::{ActionDeck, Draw};
pub use hand::Hand;
pub use pile::Pile;
