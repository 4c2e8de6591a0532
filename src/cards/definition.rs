//! Card definitions.
//!
//! Two kinds of card exist. Action cards are held and played by the
//! keeper; each belongs to one category. Storm cards are drawn one at a
//! time and demand a combination of categories.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Category;
use crate::effects::Aftermath;

/// Unique identifier for an action card instance.
///
/// Allocated when the action deck is built; two copies of the same
/// action kind have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionCardId(pub u32);

impl ActionCardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ActionCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action({})", self.0)
    }
}

/// The eight actions a keeper can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    FillOil,
    CleanLens,
    Repair,
    SecureHatches,
    TightenGuyRopes,
    Concentration,
    MomentaryStillness,
    StandAgainst,
}

impl ActionKind {
    /// Every action kind, in standard deck order.
    pub const ALL: [ActionKind; 8] = [
        ActionKind::FillOil,
        ActionKind::CleanLens,
        ActionKind::Repair,
        ActionKind::SecureHatches,
        ActionKind::TightenGuyRopes,
        ActionKind::Concentration,
        ActionKind::MomentaryStillness,
        ActionKind::StandAgainst,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::FillOil => "Fill Oil",
            ActionKind::CleanLens => "Clean Lens",
            ActionKind::Repair => "Repair Mechanics",
            ActionKind::SecureHatches => "Secure Hatches",
            ActionKind::TightenGuyRopes => "Tighten Guy Ropes",
            ActionKind::Concentration => "Concentration",
            ActionKind::MomentaryStillness => "Momentary Stillness",
            ActionKind::StandAgainst => "Stand Against",
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            ActionKind::FillOil | ActionKind::CleanLens | ActionKind::Repair => {
                Category::Maintenance
            }
            ActionKind::SecureHatches | ActionKind::TightenGuyRopes => Category::Preparation,
            ActionKind::Concentration | ActionKind::MomentaryStillness => Category::Focus,
            ActionKind::StandAgainst => Category::Resilience,
        }
    }
}

/// A single action card.
///
/// Immutable once created; moved between deck, hand and discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCard {
    pub id: ActionCardId,
    pub kind: ActionKind,
}

impl ActionCard {
    #[must_use]
    pub const fn new(id: ActionCardId, kind: ActionKind) -> Self {
        Self { id, kind }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

/// Whether a storm card only threatens or can also reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Negative,
    Positive,
}

/// Identifier of a storm card, printed as `s<n>` or `p<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StormCardId {
    pub polarity: Polarity,
    pub number: u8,
}

impl StormCardId {
    #[must_use]
    pub const fn negative(number: u8) -> Self {
        Self { polarity: Polarity::Negative, number }
    }

    #[must_use]
    pub const fn positive(number: u8) -> Self {
        Self { polarity: Polarity::Positive, number }
    }
}

impl std::fmt::Display for StormCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            Polarity::Negative => write!(f, "s{}", self.number),
            Polarity::Positive => write!(f, "p{}", self.number),
        }
    }
}

/// Requirement multiset of a storm card.
///
/// Order is as authored; duplicates are significant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement(SmallVec<[Category; 4]>);

impl Requirement {
    #[must_use]
    pub fn new(categories: &[Category]) -> Self {
        Self(SmallVec::from_slice(categories))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Categories in sorted order, for multiset comparison.
    #[must_use]
    pub fn sorted(&self) -> SmallVec<[Category; 4]> {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("None");
        }
        for (i, category) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{category}")?;
        }
        Ok(())
    }
}

/// A storm card.
///
/// ```
/// use lighthouse_keeper::cards::{Category, StormCard, StormCardId};
/// use lighthouse_keeper::effects::Aftermath;
///
/// let squall = StormCard::new(StormCardId::negative(1), "Squall", 2, &[Category::Preparation])
///     .with_aftermath(Aftermath::DiscardFromHand { count: 1 }, "Discard one card from your hand.");
///
/// assert_eq!(squall.threat, 2);
/// assert_eq!(squall.reward, None);
/// assert_eq!(squall.requirement.to_string(), "PREPARATION");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StormCard {
    pub id: StormCardId,
    pub name: String,
    pub requirement: Requirement,
    /// Strength lost when the requirement is not met.
    pub threat: i32,
    /// Strength gained when the requirement is met.
    pub reward: Option<i32>,
    pub aftermath: Aftermath,
    /// Aftermath as printed on the card.
    pub aftermath_text: String,
}

impl StormCard {
    /// Create a storm card with no reward and no aftermath.
    #[must_use]
    pub fn new(
        id: StormCardId,
        name: impl Into<String>,
        threat: i32,
        requirement: &[Category],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            requirement: Requirement::new(requirement),
            threat,
            reward: None,
            aftermath: Aftermath::None,
            aftermath_text: "No special effect.".to_string(),
        }
    }

    #[must_use]
    pub fn with_reward(mut self, reward: i32) -> Self {
        self.reward = Some(reward);
        self
    }

    #[must_use]
    pub fn with_aftermath(mut self, aftermath: Aftermath, text: impl Into<String>) -> Self {
        self.aftermath = aftermath;
        self.aftermath_text = text.into();
        self
    }
}
