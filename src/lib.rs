//! # lighthouse-keeper
//!
//! Turn-resolution engine for Lighthouse Keeper, a solitaire card game.
//! The keeper holds a hand of action cards and faces one storm card per
//! turn. Meeting the storm's category requirement keeps the light
//! burning; failing it costs light strength. Surviving the whole storm
//! deck wins, letting the light go out loses.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: A `GameSession` owns all mutable game state.
//!    Renderers read a `SessionSnapshot` and call back into the session.
//!
//! 2. **Effects As Data**: Each storm card carries its aftermath as an
//!    `Aftermath` value, resolved by one match.
//!
//! 3. **Deterministic**: Every shuffle comes from a seeded `GameRng`, so a
//!    seed and a sequence of inputs reproduce a game exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration and errors
//! - `cards`: Categories, action cards, storm cards and the catalog
//! - `zones`: Piles, the action deck and the hand
//! - `effects`: Aftermath effects and their resolution
//! - `rules`: Requirement matching, turn resolution and outcomes
//! - `session`: The game session, its builder and snapshots
//!
//! ```
//! use lighthouse_keeper::GameSession;
//!
//! let mut session = GameSession::new(42);
//! while !session.is_over() {
//!     session.pass();
//! }
//! assert!(session.status().result().is_some());
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CatalogError, ConfigError, GameRng, SessionConfig};

pub use crate::cards::{
    ActionCard, ActionCardId, ActionKind, Category, CategorySet,
    Polarity, Requirement, StormCard, StormCardId, StormCatalog,
};

pub use crate::zones::{ActionDeck, Hand, Pile};

pub use crate::effects::{Aftermath, AftermathResolver};

pub use crate::rules::{requirement_met, GameResult, SessionStatus, TurnOutcome};

pub use crate::session::{GameSession, SessionBuilder, SessionSnapshot};
