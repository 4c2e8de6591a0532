//! The storm card catalog.
//!
//! Holds every storm card the game knows about and provides lookup by
//! id. The standard table is the balance of the game: names, thresholds,
//! rewards and aftermaths are reproduced as the game plays them. Where a
//! card's printed text promises more than the game does (for example
//! "Draw 4 cards" on The Storm Passes), the aftermath follows what the
//! game does and the text is kept as printed.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::category::{Category, CategorySet};
use super::definition::{Polarity, StormCard, StormCardId};
use crate::core::CatalogError;
use crate::effects::Aftermath;

/// Registry of storm cards.
///
/// ```
/// use lighthouse_keeper::cards::{StormCatalog, StormCardId};
///
/// let catalog = StormCatalog::standard();
/// let sun = catalog.get(StormCardId::positive(19)).unwrap();
/// assert_eq!(sun.name, "Rising Sun");
/// assert_eq!(sun.reward, Some(10));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StormCatalog {
    cards: Vec<StormCard>,
    index: FxHashMap<StormCardId, usize>,
}

impl StormCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 102-card table.
    pub fn standard() -> &'static StormCatalog {
        static CATALOG: OnceLock<StormCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let mut catalog = StormCatalog::new();
            for row in STORM_TABLE {
                catalog.register(row.to_card());
            }
            catalog
        })
    }

    /// Register a storm card.
    ///
    /// Panics if a card with the same id already exists.
    pub fn register(&mut self, card: StormCard) {
        if self.index.contains_key(&card.id) {
            panic!("Storm card {} already registered", card.id);
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
    }

    #[must_use]
    pub fn get(&self, id: StormCardId) -> Option<&StormCard> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Look up a card, failing with [`CatalogError`] if it is unknown.
    pub fn require(&self, id: StormCardId) -> Result<&StormCard, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownStormCard(id))
    }

    #[must_use]
    pub fn contains(&self, id: StormCardId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StormCard> {
        self.cards.iter()
    }

    /// Cards with a negative id (`s<n>`).
    pub fn negative(&self) -> impl Iterator<Item = &StormCard> {
        self.cards.iter().filter(|c| c.id.polarity == Polarity::Negative)
    }

    /// Cards with a positive id (`p<n>`).
    pub fn positive(&self) -> impl Iterator<Item = &StormCard> {
        self.cards.iter().filter(|c| c.id.polarity == Polarity::Positive)
    }
}

struct Row {
    id: StormCardId,
    name: &'static str,
    threat: i32,
    requirement: &'static [Category],
    reward: Option<i32>,
    aftermath: Aftermath,
    text: &'static str,
}

impl Row {
    fn to_card(&self) -> StormCard {
        let card = StormCard::new(self.id, self.name, self.threat, self.requirement)
            .with_aftermath(self.aftermath, self.text);
        match self.reward {
            Some(reward) => card.with_reward(reward),
            None => card,
        }
    }
}

const fn neg(
    number: u8,
    name: &'static str,
    threat: i32,
    requirement: &'static [Category],
    aftermath: Aftermath,
    text: &'static str,
) -> Row {
    Row { id: StormCardId::negative(number), name, threat, requirement, reward: None, aftermath, text }
}

const fn pos(
    number: u8,
    name: &'static str,
    threat: i32,
    requirement: &'static [Category],
    reward: i32,
    aftermath: Aftermath,
    text: &'static str,
) -> Row {
    Row {
        id: StormCardId::positive(number),
        name,
        threat,
        requirement,
        reward: Some(reward),
        aftermath,
        text,
    }
}

const M: Category = Category::Maintenance;
const P: Category = Category::Preparation;
const F: Category = Category::Focus;
const R: Category = Category::Resilience;

const NONE: Aftermath = Aftermath::None;
const HAND1: Aftermath = Aftermath::DiscardFromHand { count: 1 };
const HAND2: Aftermath = Aftermath::DiscardFromHand { count: 2 };
const HAND3: Aftermath = Aftermath::DiscardFromHand { count: 3 };
const DECK1: Aftermath = Aftermath::DiscardFromDeck { count: 1 };
const LOSE1: Aftermath = Aftermath::LoseStrength { amount: 1 };
const DRAW1: Aftermath = Aftermath::DrawCards { count: 1 };
const DRAW2: Aftermath = Aftermath::DrawCards { count: 2 };
const DRAW3: Aftermath = Aftermath::DrawCards { count: 3 };

const fn ban(categories: &[Category]) -> Aftermath {
    Aftermath::DisableCategories { categories: CategorySet::of(categories) }
}

const QUIET: &str = "No special effect.";
const DISCARD_ONE: &str = "Discard one card from your hand.";
const DISCARD_A: &str = "Discard a card from your hand.";
const DISCARD_TWO: &str = "Discard two cards from your hand.";
const TOP_CARD: &str = "Discard the top card from the action deck.";
const TOP_TWO: &str = "Discard the top 2 cards from the action deck.";
const REGARDLESS: &str = "You lose 1 light strength regardless.";
const RESTORE_ONE: &str = "Restore 1 Light Strength.";
const RESTORE_TWO: &str = "Restore 2 Light Strength.";
const RESTORE_ONE_DRAW: &str = "Restore 1 Light Strength and draw 1 card.";

#[rustfmt::skip]
static STORM_TABLE: &[Row] = &[
    neg(1, "Monster Wind", 2, &[P], HAND1, DISCARD_ONE),
    neg(2, "Salt Spray", 1, &[M], NONE, QUIET),
    neg(3, "Equipment Failure", 2, &[M, M], DECK1, TOP_CARD),
    neg(4, "Lens Icing", 2, &[M, F], NONE, QUIET),
    neg(5, "Monster Wind", 2, &[P], HAND1, DISCARD_ONE),
    neg(6, "Shakes", 1, &[P], NONE, QUIET),
    neg(7, "Mental Strain", 1, &[F], NONE, QUIET),
    neg(8, "Total Exhaustion", 2, &[F, R], ban(&[F]), "You cannot play \"Focus\" cards next round."),
    neg(9, "Gust", 1, &[P], NONE, QUIET),
    neg(10, "Monster Wind", 2, &[P], HAND1, DISCARD_ONE),
    neg(11, "Critical Failure", 3, &[M, R], HAND2, DISCARD_TWO),
    neg(12, "Penetrating Damp", 1, &[M], DECK1, TOP_CARD),
    neg(13, "Monster Wind", 2, &[P], HAND1, DISCARD_ONE),
    neg(14, "Structural Failure", 3, &[P, R], HAND2, DISCARD_TWO),
    neg(15, "Deafening Roar", 1, &[F], NONE, QUIET),
    neg(16, "Monster Wind", 2, &[P], HAND1, DISCARD_ONE),
    neg(17, "Shattered Glass", 3, &[M, P, R], LOSE1, REGARDLESS),
    neg(18, "Relentless Rain", 1, &[M], NONE, QUIET),
    neg(19, "Gale Force", 2, &[P, P], HAND1, DISCARD_A),
    neg(20, "Electrical Fault", 2, &[M], DECK1, TOP_TWO),
    neg(21, "Crushing Solitude", 1, &[F], NONE, QUIET),
    neg(22, "Slippery Rung", 1, &[R], HAND1, DISCARD_A),
    neg(23, "Flickering Light", 2, &[M, F], LOSE1, "Lose 1 Light Strength."),
    neg(24, "Unexpected Splash", 1, &[P], NONE, QUIET),
    neg(25, "Weakened Foundation", 3, &[R, R], HAND3, "Discard 3 cards from your hand."),
    neg(26, "Echoing Silence", 1, &[F], NONE, QUIET),
    neg(27, "Corroded Parts", 2, &[M, M], HAND1, DISCARD_A),
    neg(28, "Spiritual Drain", 1, &[F, F], HAND1, DISCARD_A),
    neg(29, "Distant Cry", 1, &[R], NONE, QUIET),
    neg(30, "Broken Pulley", 2, &[M], DECK1, TOP_CARD),
    neg(31, "Shifting Ground", 1, &[P], NONE, QUIET),
    neg(32, "Frigid Air", 2, &[M, R], HAND2, DISCARD_TWO),
    neg(33, "Phantom Ships", 1, &[F], NONE, QUIET),
    neg(34, "Sudden Squall", 2, &[P], HAND1, DISCARD_A),
    neg(35, "Seeping Water", 1, &[M], NONE, QUIET),
    neg(36, "Disorientation", 2, &[F, R], ban(&[F, R]), "You cannot play \"Focus\" or \"Resilience\" cards next round."),
    neg(37, "Unraveling Rope", 1, &[M], NONE, QUIET),
    neg(38, "Mysterious Shadow", 1, &[F], HAND1, DISCARD_A),
    neg(39, "Overwhelming Pressure", 2, &[R], DECK1, TOP_TWO),
    neg(40, "Screeching Metal", 1, &[M, P], NONE, QUIET),
    neg(41, "Shattered Mirror", 3, &[M, F], LOSE1, REGARDLESS),
    neg(42, "Blinding Fog", 1, &[F], NONE, QUIET),
    neg(43, "Harsh Cold", 2, &[R], HAND1, DISCARD_A),
    neg(44, "Ghostly Whispers", 1, &[F], NONE, QUIET),
    neg(45, "Violent Tremor", 2, &[P, R], HAND2, DISCARD_TWO),
    neg(46, "Wailing Wind", 1, &[P], NONE, QUIET),
    neg(47, "Loose Bolt", 1, &[M], NONE, QUIET),
    neg(48, "Sudden Glitch", 2, &[M, M], DECK1, TOP_CARD),
    neg(49, "Spiteful Current", 2, &[P, P], HAND1, DISCARD_A),
    neg(50, "Endless Night", 3, &[F, F], LOSE1, REGARDLESS),
    neg(51, "Chilling Spray", 1, &[M], NONE, QUIET),
    neg(52, "Disintegrating Rock", 2, &[P, R], HAND2, DISCARD_TWO),
    neg(53, "Spooky Sound", 1, &[F], NONE, QUIET),
    neg(54, "Broken Compass", 2, &[M, P], LOSE1, REGARDLESS),
    neg(55, "Eroding Cliff", 2, &[R], DECK1, TOP_CARD),
    neg(56, "Intense Fog", 1, &[F], NONE, QUIET),
    neg(57, "Shifting Barometer", 1, &[P], NONE, QUIET),
    neg(58, "Sleepless Night", 1, &[F], NONE, QUIET),
    neg(59, "Cold Draft", 1, &[P], NONE, QUIET),
    neg(60, "Haunting Murmur", 1, &[F], NONE, QUIET),
    neg(61, "Heavy Rain", 1, &[M], NONE, QUIET),
    neg(62, "Mysterious Fissure", 2, &[M, P], DECK1, TOP_CARD),
    neg(63, "Overcast Sky", 1, &[M], NONE, QUIET),
    neg(64, "Shivering", 1, &[R], NONE, QUIET),
    neg(65, "Whirlwind", 2, &[P], HAND1, DISCARD_A),
    neg(66, "Icy Blast", 2, &[M, P], HAND1, DISCARD_A),
    neg(67, "Thunderous Waves", 2, &[P, R], HAND2, DISCARD_TWO),
    neg(68, "Worn Gears", 2, &[M, M], ban(&[M]), "You cannot play \"Maintenance\" cards next round."),
    neg(69, "Dizzying Heights", 1, &[F], NONE, QUIET),
    neg(70, "Tangled Ropes", 2, &[M], HAND1, "Discard 1 card from your hand."),
    neg(71, "Foul Odor", 1, &[F], NONE, QUIET),
    neg(72, "Sudden Slip", 2, &[R], HAND1, "Discard 2 cards from your hand."),

    pos(1, "Eye of the Storm", 2, &[F], 3, NONE, "Gain 3 Light Strength."),
    pos(2, "Calm", 1, &[F], 1, NONE, RESTORE_ONE),
    pos(3, "Glimmer of Hope", 1, &[R], 0, DRAW2, "Draw two cards."),
    pos(4, "Respite", 2, &[P], 2, NONE, RESTORE_TWO),
    pos(5, "Found Supplies", 2, &[M], 0, DRAW3, "Draw 3 cards."),
    pos(6, "A Moment of Clarity", 1, &[F], 1, DRAW1, RESTORE_ONE_DRAW),
    pos(7, "Passing Cloud", 2, &[P, F], 2, NONE, QUIET),
    pos(8, "Lucky Break", 1, &[R], 1, NONE, RESTORE_ONE),
    pos(9, "The Tide Turns", 2, &[M, R], 2, DRAW1, "Draw a card."),
    pos(10, "Beacon of Stability", 2, &[M], 2, NONE, RESTORE_TWO),
    pos(11, "Favorable Winds", 1, &[P], 0, DRAW2, "Draw 2 cards."),
    pos(12, "Quiet Before the Storm", 2, &[F], 1, DRAW1, RESTORE_ONE_DRAW),
    pos(13, "Unexpected Lull", 2, &[M, R], 2, NONE, QUIET),
    pos(14, "Rejuvenation", 2, &[M], 2, NONE, RESTORE_TWO),
    pos(15, "Gathering Strength", 2, &[F, R], 0, DRAW2, "Draw 3 cards."),
    pos(16, "Peaceful Moment", 1, &[F], 1, NONE, RESTORE_ONE),
    pos(17, "Clear Horizon", 2, &[P], 1, DRAW1, RESTORE_ONE_DRAW),
    pos(18, "Gentle Breezes", 1, &[P], 1, NONE, QUIET),
    pos(19, "Rising Sun", 4, &[M, P, F, R], 10, NONE, "Restore all Light Strength to max (10)."),
    pos(20, "Miraculous Recovery", 3, &[M, F], 2, DRAW2, "Restore 2 Light Strength and draw 2 cards."),
    pos(21, "Restored Hope", 2, &[R], 0, DRAW2, "Draw 3 cards."),
    pos(22, "Guiding Star", 1, &[F], 1, NONE, QUIET),
    pos(23, "Good Fortune", 1, &[P], 1, NONE, RESTORE_ONE),
    pos(24, "Renewal", 2, &[M], 1, DRAW1, RESTORE_ONE_DRAW),
    pos(25, "Serenity", 2, &[F, R], 0, DRAW2, "Draw 2 cards."),
    pos(26, "Promising Dawn", 2, &[M, P], 2, NONE, RESTORE_TWO),
    pos(27, "Steady Hand", 1, &[M], 0, DRAW1, "Draw 1 card."),
    pos(28, "A Helping Hand", 1, &[R], 1, NONE, RESTORE_ONE),
    pos(29, "Perfect Calm", 2, &[F, P], 2, NONE, QUIET),
    pos(30, "The Storm Passes", 3, &[M, P, R], 0, DRAW2, "Draw 4 cards."),
];
