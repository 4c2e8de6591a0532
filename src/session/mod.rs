//! Game sessions.
//!
//! A `GameSession` owns every piece of mutable game state: light
//! strength, the action deck and discard, the hand and selection, the
//! storm deck and discard, and the category ban. All changes go through
//! its methods; turn resolution lives in [`crate::rules`].
//!
//! ```
//! use lighthouse_keeper::session::SessionBuilder;
//!
//! let mut session = SessionBuilder::new().build(3).unwrap();
//!
//! let first = session.hand().cards()[0].id;
//! assert!(session.toggle_select(first));
//!
//! let outcome = session.play_selection();
//! assert!(outcome.cards_discarded.contains(&first));
//! assert!(session.hand().selection().is_empty());
//! ```

mod builder;
mod snapshot;

pub use builder::SessionBuilder;
pub use snapshot::{SessionSnapshot, LOW_LIGHT_THRESHOLD};

use crate::cards::{ActionCardId, CategorySet, StormCard};
use crate::core::{GameRng, SessionConfig};
use crate::rules::{GameResult, SessionStatus};
use crate::zones::{ActionDeck, Hand, Pile};

use builder::Setup;

/// A single game of Lighthouse Keeper.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) config: SessionConfig,
    pub(crate) setup: Setup,
    /// Seed source; forked on restart.
    pub(crate) root: GameRng,
    /// Stream used for action deck shuffles during play.
    pub(crate) rng: GameRng,
    pub(crate) strength: i32,
    pub(crate) actions: ActionDeck,
    pub(crate) hand: Hand,
    pub(crate) storm_deck: Pile<StormCard>,
    pub(crate) storm_discard: Pile<StormCard>,
    pub(crate) active_storm: Option<StormCard>,
    /// Categories banned for the current round.
    pub(crate) ban: CategorySet,
    /// Categories banned for the round after this one.
    pub(crate) next_ban: CategorySet,
    pub(crate) status: SessionStatus,
    pub(crate) turn: u32,
}

impl GameSession {
    /// Start the standard game.
    pub fn new(seed: u64) -> Self {
        // The default setup always validates.
        let setup = builder::standard_setup();
        Self::deal(setup, GameRng::new(seed))
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn light_strength(&self) -> i32 {
        self.strength
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn action_deck(&self) -> &ActionDeck {
        &self.actions
    }

    #[must_use]
    pub fn active_storm_card(&self) -> Option<&StormCard> {
        self.active_storm.as_ref()
    }

    /// Storm cards still waiting to be drawn.
    #[must_use]
    pub fn storm_deck_len(&self) -> usize {
        self.storm_deck.len()
    }

    /// Storm cards already resolved, oldest first.
    #[must_use]
    pub fn storm_discard(&self) -> &[StormCard] {
        self.storm_discard.as_slice()
    }

    #[must_use]
    pub fn restricted_categories(&self) -> CategorySet {
        self.ban
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Action cards across deck, discard and hand.
    #[must_use]
    pub fn total_action_cards(&self) -> usize {
        self.actions.total() + self.hand.len()
    }

    /// Select or deselect a card in the hand.
    ///
    /// Returns `true` if the selection changed. Unknown ids, cards of a
    /// category banned this round, and any input after the game ended
    /// are ignored.
    pub fn toggle_select(&mut self, id: ActionCardId) -> bool {
        if self.is_over() {
            return false;
        }
        self.hand.toggle_select(id, self.ban)
    }

    pub fn clear_selection(&mut self) {
        self.hand.clear_selection();
    }

    /// Read-only state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            light_strength: self.strength,
            max_light_strength: self.config.max_strength,
            hand: self.hand.cards().to_vec(),
            selection: self.hand.selection().to_vec(),
            action_deck_count: self.actions.deck_len(),
            action_discard_count: self.actions.discard_len(),
            storm_deck_count: self.storm_deck.len(),
            storm_discard_count: self.storm_discard.len(),
            active_storm_card: self.active_storm.clone(),
            restricted_categories: self.ban,
            status: self.status,
            turn: self.turn,
        }
    }

    /// Start a new game with the same setup and a fresh shuffle.
    pub fn restart(&mut self) {
        let root = self.root.fork();
        log::info!("restarting session with seed {}", root.seed());
        *self = Self::deal(self.setup.clone(), root);
    }

    /// Draw the next storm card, or end the game if none are left.
    pub(crate) fn advance_storm(&mut self) {
        match self.storm_deck.draw() {
            Some(card) => {
                log::debug!("storm card {} '{}' drawn", card.id, card.name);
                self.active_storm = Some(card);
            }
            None => {
                self.active_storm = None;
                self.status = SessionStatus::Over(GameResult::Victory);
                log::info!("storm deck exhausted: the keeper survived");
            }
        }
    }
}
