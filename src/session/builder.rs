//! Building a game session.
//!
//! By default a session deals the standard game: a 40-card action deck
//! (five copies of each action) and 20 storm cards drawn at random from
//! the standard catalog. Tests and scenarios can stack either deck.

use crate::cards::{ActionCard, ActionCardId, ActionKind, StormCard, StormCardId, StormCatalog};
use crate::core::{ConfigError, GameRng, SessionConfig};
use crate::zones::{ActionDeck, Hand, Pile};

use super::GameSession;
use crate::rules::SessionStatus;

#[derive(Clone, Debug)]
enum StormSource {
    /// Shuffle the standard catalog and deal `storm_deck_size` cards.
    Standard,
    /// Catalog ids, bottom to top, dealt unshuffled.
    StackedIds(Vec<StormCardId>),
    /// Explicit cards, bottom to top, dealt unshuffled.
    Stacked(Vec<StormCard>),
}

#[derive(Clone, Debug)]
enum ActionSource {
    /// `copies_per_action` of every action kind, shuffled.
    Standard,
    /// Explicit kinds, bottom to top, unshuffled.
    Stacked(Vec<ActionKind>),
}

/// Builder for a [`GameSession`].
///
/// ```
/// use lighthouse_keeper::session::SessionBuilder;
///
/// let session = SessionBuilder::new().build(42).unwrap();
/// let snapshot = session.snapshot();
///
/// assert_eq!(snapshot.light_strength, 10);
/// assert_eq!(snapshot.hand.len(), 5);
/// assert_eq!(snapshot.action_deck_count, 35);
/// assert_eq!(snapshot.storm_deck_count, 19);
/// assert!(snapshot.active_storm_card.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    config: SessionConfig,
    storms: StormSource,
    actions: ActionSource,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            storms: StormSource::Standard,
            actions: ActionSource::Standard,
        }
    }
}

/// Validated setup, kept by the session so it can restart.
#[derive(Clone, Debug)]
pub(crate) struct Setup {
    pub(crate) config: SessionConfig,
    storms: Vec<StormCard>,
    shuffle_storms: bool,
    actions: Vec<ActionKind>,
    shuffle_actions: bool,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Stack the storm deck with catalog cards, bottom to top.
    ///
    /// The last id is resolved first. `storm_deck_size` is ignored.
    #[must_use]
    pub fn storm_ids(mut self, ids: impl IntoIterator<Item = StormCardId>) -> Self {
        self.storms = StormSource::StackedIds(ids.into_iter().collect());
        self
    }

    /// Stack the storm deck with explicit cards, bottom to top.
    #[must_use]
    pub fn storm_cards(mut self, cards: impl IntoIterator<Item = StormCard>) -> Self {
        self.storms = StormSource::Stacked(cards.into_iter().collect());
        self
    }

    /// Stack the action deck, bottom to top. The opening hand is drawn
    /// from the top.
    #[must_use]
    pub fn action_cards(mut self, kinds: impl IntoIterator<Item = ActionKind>) -> Self {
        self.actions = ActionSource::Stacked(kinds.into_iter().collect());
        self
    }

    /// Validate the setup and deal the opening position.
    pub fn build(self, seed: u64) -> Result<GameSession, ConfigError> {
        let setup = self.validate()?;
        Ok(GameSession::deal(setup, GameRng::new(seed)))
    }

    fn validate(self) -> Result<Setup, ConfigError> {
        let catalog = StormCatalog::standard();
        let mut config = self.config;

        let (storms, shuffle_storms) = match self.storms {
            StormSource::Standard => (standard_storms(), true),
            StormSource::StackedIds(ids) => {
                let cards = ids
                    .into_iter()
                    .map(|id| catalog.require(id).cloned())
                    .collect::<Result<Vec<_>, _>>()?;
                (cards, false)
            }
            StormSource::Stacked(cards) => (cards, false),
        };
        if let Some(card) = storms.iter().find(|c| c.threat <= 0 || c.reward.is_some_and(|r| r < 0)) {
            return Err(ConfigError::InvalidStormCard(card.id));
        }
        if !shuffle_storms {
            config.storm_deck_size = storms.len();
        }
        config.validate(storms.len())?;

        let (actions, shuffle_actions) = match self.actions {
            ActionSource::Standard => (standard_actions(config.copies_per_action), true),
            ActionSource::Stacked(kinds) => (kinds, false),
        };

        Ok(Setup { config, storms, shuffle_storms, actions, shuffle_actions })
    }
}

fn standard_storms() -> Vec<StormCard> {
    StormCatalog::standard().iter().cloned().collect()
}

fn standard_actions(copies: usize) -> Vec<ActionKind> {
    (0..copies).flat_map(|_| ActionKind::ALL).collect()
}

/// Setup of the standard game with the default configuration.
pub(crate) fn standard_setup() -> Setup {
    let config = SessionConfig::default();
    Setup {
        storms: standard_storms(),
        shuffle_storms: true,
        actions: standard_actions(config.copies_per_action),
        shuffle_actions: true,
        config,
    }
}

impl GameSession {
    /// Deal a fresh game from a validated setup.
    pub(crate) fn deal(setup: Setup, root: GameRng) -> Self {
        let config = setup.config.clone();

        let mut rng = root.for_context("action-deck");
        let cards = setup
            .actions
            .iter()
            .enumerate()
            .map(|(i, &kind)| ActionCard::new(ActionCardId::new(i as u32), kind))
            .collect();
        let mut actions = ActionDeck::new(cards);
        if setup.shuffle_actions {
            actions.shuffle(&mut rng);
        }

        let mut storm_deck = Pile::from_vec(setup.storms.clone());
        if setup.shuffle_storms {
            storm_deck.shuffle(&mut root.for_context("storm-deck"));
            storm_deck.keep_top(config.storm_deck_size);
        }

        let mut hand = Hand::new();
        hand.extend(actions.draw(config.hand_size, &mut rng).cards);

        let mut session = Self {
            strength: config.starting_strength,
            config,
            setup,
            root,
            rng,
            actions,
            hand,
            storm_deck,
            storm_discard: Pile::new(),
            active_storm: None,
            ban: Default::default(),
            next_ban: Default::default(),
            status: SessionStatus::InProgress,
            turn: 1,
        };
        session.advance_storm();

        log::debug!(
            "dealt session (seed {}): {} action cards, {} storm cards",
            session.root.seed(),
            session.total_action_cards(),
            session.storm_deck.len() + usize::from(session.active_storm.is_some()),
        );
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::core::CatalogError;
    use crate::rules::GameResult;

    #[test]
    fn test_standard_deal() {
        let session = SessionBuilder::new().build(7).unwrap();

        assert_eq!(session.light_strength(), 10);
        assert_eq!(session.hand().len(), 5);
        assert_eq!(session.total_action_cards(), 40);
        assert_eq!(session.storm_deck.len(), 19);
        assert!(session.active_storm_card().is_some());
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn test_standard_action_deck_composition() {
        let session = SessionBuilder::new().build(7).unwrap();

        let mut all: Vec<ActionCard> = session.actions.deck_cards().to_vec();
        all.extend_from_slice(session.hand().cards());
        for kind in ActionKind::ALL {
            assert_eq!(all.iter().filter(|c| c.kind == kind).count(), 5);
        }
        let maintenance = all.iter().filter(|c| c.category() == Category::Maintenance).count();
        assert_eq!(maintenance, 15);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = SessionBuilder::new().build(99).unwrap();
        let b = SessionBuilder::new().build(99).unwrap();
        let c = SessionBuilder::new().build(100).unwrap();

        assert_eq!(a.snapshot(), b.snapshot());
        assert_ne!(a.snapshot(), c.snapshot());
    }

    #[test]
    fn test_stacked_decks() {
        let session = SessionBuilder::new()
            .storm_ids([StormCardId::negative(2), StormCardId::positive(19)])
            .action_cards([ActionKind::FillOil, ActionKind::StandAgainst])
            .build(1)
            .unwrap();

        assert_eq!(session.active_storm_card().unwrap().id, StormCardId::positive(19));
        assert_eq!(session.storm_deck.len(), 1);

        let kinds: Vec<_> = session.hand().cards().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ActionKind::StandAgainst, ActionKind::FillOil]);
    }

    #[test]
    fn test_unknown_storm_id() {
        let err = SessionBuilder::new()
            .storm_ids([StormCardId::negative(200)])
            .build(1)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Catalog(CatalogError::UnknownStormCard(StormCardId::negative(200)))
        );
    }

    #[test]
    fn test_rejects_bad_storm_values() {
        let zero_threat = StormCard::new(StormCardId::negative(90), "Mist", 0, &[Category::Focus]);
        let err = SessionBuilder::new().storm_cards([zero_threat]).build(1).unwrap_err();
        assert_eq!(err, ConfigError::InvalidStormCard(StormCardId::negative(90)));

        let drain = StormCard::new(StormCardId::positive(90), "Drain", 1, &[Category::Focus]).with_reward(-2);
        let err = SessionBuilder::new().storm_cards([drain]).build(1).unwrap_err();
        assert_eq!(err, ConfigError::InvalidStormCard(StormCardId::positive(90)));
    }

    #[test]
    fn test_invalid_config() {
        let err = SessionBuilder::new()
            .config(SessionConfig::default().with_storm_deck_size(200))
            .build(1)
            .unwrap_err();
        assert_eq!(err, ConfigError::StormDeckTooLarge { requested: 200, available: 102 });
    }

    #[test]
    fn test_empty_storm_deck_is_immediate_victory() {
        let session = SessionBuilder::new()
            .storm_cards(Vec::new())
            .build(1)
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Over(GameResult::Victory));
        assert!(session.active_storm_card().is_none());
        assert_eq!(session.light_strength(), 10);
    }
}
