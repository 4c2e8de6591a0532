//! Aftermath resolution.
//!
//! `AftermathResolver` applies an [`Aftermath`] to the parts of a session
//! it touches. Every kind tolerates a short hand or deck: discarding from
//! an empty pile does nothing.

use crate::cards::{ActionCard, CategorySet};
use crate::core::GameRng;
use crate::zones::{ActionDeck, Hand};

use super::Aftermath;

/// Mutable view of the session state an aftermath may change.
pub struct AftermathScope<'a> {
    pub hand: &'a mut Hand,
    pub actions: &'a mut ActionDeck,
    /// Light strength, unclamped during resolution.
    pub strength: &'a mut i32,
    pub max_strength: i32,
    /// Categories banned for the next round.
    pub next_ban: &'a mut CategorySet,
    pub rng: &'a mut GameRng,
}

/// What an aftermath did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AftermathReport {
    /// Cards moved to the action discard pile.
    pub discarded: Vec<ActionCard>,
    /// Cards drawn into the hand.
    pub drawn: Vec<ActionCard>,
    /// Whether drawing recycled the discard pile.
    pub reshuffled: bool,
}

/// Applies aftermath effects.
pub struct AftermathResolver;

impl AftermathResolver {
    /// Apply `aftermath`. Runs whether or not the requirement was met.
    pub fn apply(aftermath: Aftermath, scope: AftermathScope<'_>) -> AftermathReport {
        let mut report = AftermathReport::default();

        match aftermath {
            Aftermath::None => {}
            Aftermath::DiscardFromHand { count } => {
                for card in scope.hand.discard_unselected(count.into()) {
                    scope.actions.discard(card);
                    report.discarded.push(card);
                }
            }
            Aftermath::DiscardFromDeck { count } => {
                report.discarded = scope.actions.discard_top(count.into());
            }
            Aftermath::LoseStrength { amount } => {
                *scope.strength = scope.strength.saturating_sub(i32::from(amount));
            }
            Aftermath::DisableCategories { categories } => {
                *scope.next_ban = scope.next_ban.union(categories);
            }
            Aftermath::DrawCards { count } => {
                let draw = scope.actions.draw(count.into(), scope.rng);
                scope.hand.extend(draw.cards.iter().copied());
                report.drawn = draw.cards;
                report.reshuffled = draw.reshuffled;
            }
            Aftermath::RestoreStrength { amount } => {
                *scope.strength = scope.strength.saturating_add(i32::from(amount));
            }
            Aftermath::RestoreToMax => {
                *scope.strength = (*scope.strength).max(scope.max_strength);
            }
        }

        log::trace!(
            "aftermath '{aftermath}': {} discarded, {} drawn",
            report.discarded.len(),
            report.drawn.len()
        );
        report
    }
}
