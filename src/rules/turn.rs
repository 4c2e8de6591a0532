//! Turn resolution.
//!
//! One call resolves one storm card from start to finish:
//!
//! 1. Match the selection's categories against the requirement
//! 2. Add the reward on success, subtract the threat on failure
//! 3. Apply the aftermath, met or not
//! 4. Clamp light strength to `0..=max`
//! 5. Spend the played cards, discard the storm card
//! 6. Replenish the hand
//! 7. End the game, or draw the next storm card

use smallvec::SmallVec;

use crate::cards::{ActionCardId, Category};
use crate::effects::{AftermathResolver, AftermathScope};
use crate::session::GameSession;

use super::matching::requirement_met;
use super::outcome::{GameResult, SessionStatus, TurnOutcome};

impl GameSession {
    /// Resolve the active storm card.
    ///
    /// `selected` replaces the current selection; ids not in the hand or
    /// of a category banned this round are ignored. With
    /// `did_play_cards == false` the keeper passes and plays nothing.
    ///
    /// After the game has ended this changes nothing and reports the
    /// final result.
    pub fn resolve_turn(&mut self, selected: &[ActionCardId], did_play_cards: bool) -> TurnOutcome {
        let Some(storm) = self.active_storm.take() else {
            return self.finished_outcome();
        };

        if did_play_cards {
            self.hand.set_selection(selected, self.ban);
        } else {
            self.hand.clear_selection();
        }

        let played: SmallVec<[Category; 8]> = self
            .hand
            .selected_cards()
            .iter()
            .map(|c| c.category())
            .collect();
        let success = requirement_met(&played, &storm.requirement);

        let before = self.strength;
        if success {
            if let Some(reward) = storm.reward {
                self.strength = self.strength.saturating_add(reward);
            }
        } else {
            self.strength = self.strength.saturating_sub(storm.threat);
        }

        let aftermath = AftermathResolver::apply(
            storm.aftermath,
            AftermathScope {
                hand: &mut self.hand,
                actions: &mut self.actions,
                strength: &mut self.strength,
                max_strength: self.config.max_strength,
                next_ban: &mut self.next_ban,
                rng: &mut self.rng,
            },
        );

        self.strength = self.strength.clamp(0, self.config.max_strength);

        let spent = self.hand.take_selected();
        for &card in &spent {
            self.actions.discard(card);
        }
        self.ban = std::mem::take(&mut self.next_ban);

        let missing = self.config.hand_size.saturating_sub(self.hand.len());
        let replenish = self.actions.draw(missing, &mut self.rng);
        self.hand.extend(replenish.cards.iter().copied());

        log::debug!(
            "turn {}: {} '{}' {} ({} played), strength {} -> {}",
            self.turn,
            storm.id,
            storm.name,
            if success { "met" } else { "failed" },
            spent.len(),
            before,
            self.strength,
        );

        let storm_id = storm.id;
        self.storm_discard.push(storm);
        self.turn += 1;

        if self.strength == 0 {
            self.status = SessionStatus::Over(GameResult::Defeat);
            log::info!("light extinguished on turn {}", self.turn - 1);
        } else {
            self.advance_storm();
        }

        TurnOutcome {
            storm_card: Some(storm_id),
            success,
            light_strength_delta: self.strength - before,
            new_light_strength: self.strength,
            cards_discarded: spent
                .iter()
                .chain(&aftermath.discarded)
                .map(|c| c.id)
                .collect(),
            cards_drawn: aftermath
                .drawn
                .iter()
                .chain(&replenish.cards)
                .map(|c| c.id)
                .collect(),
            reshuffled: aftermath.reshuffled || replenish.reshuffled,
            terminal: self.status.result(),
        }
    }

    /// Resolve with the cards currently selected in the hand.
    pub fn play_selection(&mut self) -> TurnOutcome {
        let selected = self.hand.selection().to_vec();
        self.resolve_turn(&selected, true)
    }

    /// Play nothing against the active storm card.
    pub fn pass(&mut self) -> TurnOutcome {
        self.resolve_turn(&[], false)
    }

    fn finished_outcome(&self) -> TurnOutcome {
        TurnOutcome {
            storm_card: None,
            success: false,
            light_strength_delta: 0,
            new_light_strength: self.strength,
            cards_discarded: Vec::new(),
            cards_drawn: Vec::new(),
            reshuffled: false,
            terminal: self.status.result(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, Category::*, StormCard, StormCardId};
    use crate::core::SessionConfig;
    use crate::effects::Aftermath;
    use crate::session::SessionBuilder;

    fn storm(number: u8, threat: i32, requirement: &[Category]) -> StormCard {
        StormCard::new(StormCardId::negative(number), "Test Storm", threat, requirement)
    }

    fn session(storms: Vec<StormCard>, actions: Vec<ActionKind>, strength: i32) -> GameSession {
        SessionBuilder::new()
            .config(SessionConfig::default().with_starting_strength(strength))
            .storm_cards(storms)
            .action_cards(actions)
            .build(17)
            .unwrap()
    }

    fn ids_of(session: &GameSession, kind: ActionKind) -> Vec<ActionCardId> {
        session
            .hand()
            .cards()
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.id)
            .collect()
    }

    #[test]
    fn test_success_keeps_strength() {
        let mut s = session(
            vec![storm(1, 1, &[Maintenance]), storm(2, 2, &[Maintenance])],
            vec![ActionKind::FillOil; 8],
            6,
        );
        let oil = ids_of(&s, ActionKind::FillOil);

        let outcome = s.resolve_turn(&oil[..1], true);
        assert!(outcome.success);
        assert_eq!(outcome.storm_card, Some(StormCardId::negative(2)));
        assert_eq!(outcome.light_strength_delta, 0);
        assert_eq!(outcome.new_light_strength, 6);
        assert_eq!(outcome.cards_discarded, vec![oil[0]]);
        assert_eq!(outcome.cards_drawn.len(), 1);
        assert_eq!(outcome.terminal, None);
        assert_eq!(s.hand().len(), 5);
    }

    #[test]
    fn test_failure_applies_threat() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), storm(2, 3, &[Resilience, Resilience])],
            vec![ActionKind::FillOil; 8],
            6,
        );

        let outcome = s.pass();
        assert!(!outcome.success);
        assert_eq!(outcome.light_strength_delta, -3);
        assert_eq!(s.light_strength(), 3);
        assert!(outcome.cards_discarded.is_empty());
        assert!(outcome.cards_drawn.is_empty());
    }

    #[test]
    fn test_playing_wrong_cards_still_spends_them() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), storm(2, 2, &[Focus])],
            vec![ActionKind::FillOil; 8],
            6,
        );
        let oil = ids_of(&s, ActionKind::FillOil);

        let outcome = s.resolve_turn(&oil[..2], true);
        assert!(!outcome.success);
        assert_eq!(outcome.cards_discarded.len(), 2);
        assert_eq!(s.action_deck().discard_len(), 2);
        assert_eq!(s.light_strength(), 4);
    }

    #[test]
    fn test_reward_on_success() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), StormCard::new(StormCardId::positive(1), "Lull", 2, &[Focus]).with_reward(3)],
            vec![ActionKind::Concentration; 6],
            5,
        );
        let focus = ids_of(&s, ActionKind::Concentration);

        let outcome = s.resolve_turn(&focus[..1], true);
        assert!(outcome.success);
        assert_eq!(outcome.light_strength_delta, 3);
        assert_eq!(s.light_strength(), 8);
    }

    #[test]
    fn test_reward_clamped_to_max() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), StormCard::new(StormCardId::positive(1), "Lull", 2, &[Focus]).with_reward(3)],
            vec![ActionKind::Concentration; 6],
            9,
        );
        let focus = ids_of(&s, ActionKind::Concentration);

        let outcome = s.resolve_turn(&focus[..1], true);
        assert_eq!(outcome.new_light_strength, 10);
        assert_eq!(outcome.light_strength_delta, 1);
    }

    #[test]
    fn test_empty_requirement_pass_succeeds() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), StormCard::new(StormCardId::positive(2), "Clear Sky", 3, &[]).with_reward(2)],
            vec![ActionKind::FillOil; 6],
            5,
        );

        let outcome = s.pass();
        assert!(outcome.success);
        assert_eq!(s.light_strength(), 7);
    }

    #[test]
    fn test_selection_filters_invalid_ids() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), storm(2, 2, &[Maintenance, Maintenance])],
            vec![ActionKind::FillOil; 6],
            5,
        );
        let oil = ids_of(&s, ActionKind::FillOil);

        // Same card twice plus an unknown id: only one distinct match
        let outcome = s.resolve_turn(&[oil[0], oil[0], ActionCardId::new(999)], true);
        assert!(!outcome.success);
        assert_eq!(outcome.cards_discarded, vec![oil[0]]);
    }

    #[test]
    fn test_did_not_play_ignores_ids() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), storm(2, 2, &[Maintenance])],
            vec![ActionKind::FillOil; 6],
            5,
        );
        let oil = ids_of(&s, ActionKind::FillOil);

        let outcome = s.resolve_turn(&oil, false);
        assert!(!outcome.success);
        assert!(outcome.cards_discarded.is_empty());
        assert_eq!(s.hand().len(), 5);
    }

    #[test]
    fn test_aftermath_fires_on_success() {
        let mut s = session(
            vec![
                storm(1, 1, &[Focus]),
                storm(2, 1, &[Maintenance]).with_aftermath(Aftermath::LoseStrength { amount: 1 }, "Lose 1."),
            ],
            vec![ActionKind::FillOil; 6],
            5,
        );
        let oil = ids_of(&s, ActionKind::FillOil);

        let outcome = s.resolve_turn(&oil[..1], true);
        assert!(outcome.success);
        assert_eq!(outcome.light_strength_delta, -1);
    }

    #[test]
    fn test_restore_aftermath_fires_on_failure() {
        let mut s = session(
            vec![
                storm(1, 1, &[Focus]),
                storm(2, 1, &[Focus]).with_aftermath(Aftermath::RestoreStrength { amount: 2 }, "Restore 2."),
            ],
            vec![ActionKind::FillOil; 6],
            6,
        );

        let outcome = s.pass();
        assert!(!outcome.success);
        assert_eq!(outcome.new_light_strength, 7);
        assert_eq!(outcome.light_strength_delta, 1);
    }

    #[test]
    fn test_huge_threat_saturates_to_defeat() {
        let mut s = session(
            vec![
                storm(1, 1, &[Focus]),
                storm(2, i32::MAX, &[Focus]).with_aftermath(Aftermath::LoseStrength { amount: 5 }, "Lose 5."),
            ],
            vec![ActionKind::FillOil; 6],
            6,
        );

        let outcome = s.pass();
        assert_eq!(outcome.new_light_strength, 0);
        assert_eq!(outcome.light_strength_delta, -6);
        assert_eq!(outcome.terminal, Some(GameResult::Defeat));
    }

    #[test]
    fn test_loss_stops_before_next_storm() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), storm(2, 3, &[Focus])],
            vec![ActionKind::FillOil; 6],
            2,
        );

        let outcome = s.pass();
        assert_eq!(outcome.new_light_strength, 0);
        assert_eq!(outcome.terminal, Some(GameResult::Defeat));
        assert!(s.active_storm_card().is_none());
        assert_eq!(s.storm_deck_len(), 1);
    }

    #[test]
    fn test_last_storm_is_victory() {
        let mut s = session(vec![storm(1, 1, &[Focus])], vec![ActionKind::FillOil; 6], 5);

        let outcome = s.pass();
        assert_eq!(outcome.terminal, Some(GameResult::Victory));
        assert_eq!(s.light_strength(), 4);
        assert_eq!(s.storm_discard().len(), 1);
    }

    #[test]
    fn test_resolving_finished_game_is_noop() {
        let mut s = session(vec![storm(1, 4, &[Focus])], vec![ActionKind::FillOil; 6], 2);
        s.pass();
        assert!(s.is_over());

        let hand_before = s.hand().cards().to_vec();
        let outcome = s.pass();
        assert_eq!(outcome.storm_card, None);
        assert_eq!(outcome.light_strength_delta, 0);
        assert_eq!(outcome.terminal, Some(GameResult::Defeat));
        assert_eq!(s.hand().cards(), hand_before.as_slice());
    }

    #[test]
    fn test_ban_lasts_one_round() {
        let ban = Aftermath::DisableCategories { categories: crate::cards::CategorySet::of(&[Focus]) };
        let mut s = session(
            vec![
                storm(1, 1, &[Focus]),
                storm(2, 1, &[Focus]),
                storm(3, 1, &[Maintenance]).with_aftermath(ban, "No Focus next round."),
            ],
            vec![ActionKind::Concentration, ActionKind::Concentration, ActionKind::FillOil, ActionKind::Concentration],
            8,
        );

        s.pass();
        assert!(s.restricted_categories().contains(Focus));

        // Focus cards passed in are dropped, so the Focus requirement fails
        let focus = ids_of(&s, ActionKind::Concentration);
        let outcome = s.resolve_turn(&focus, true);
        assert!(!outcome.success);
        assert!(outcome.cards_discarded.is_empty());
        assert!(s.restricted_categories().is_empty());

        let focus = ids_of(&s, ActionKind::Concentration);
        let outcome = s.resolve_turn(&focus[..1], true);
        assert!(outcome.success);
    }

    #[test]
    fn test_play_selection_uses_managed_selection() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), storm(2, 2, &[Maintenance])],
            vec![ActionKind::FillOil; 6],
            5,
        );
        let oil = ids_of(&s, ActionKind::FillOil);
        s.toggle_select(oil[1]);

        let outcome = s.play_selection();
        assert!(outcome.success);
        assert_eq!(outcome.cards_discarded, vec![oil[1]]);
    }

    #[test]
    fn test_turn_counter() {
        let mut s = session(
            vec![storm(1, 1, &[Focus]), storm(2, 1, &[Focus]), storm(3, 1, &[Focus])],
            vec![ActionKind::FillOil; 6],
            9,
        );
        assert_eq!(s.turn(), 1);
        s.pass();
        s.pass();
        assert_eq!(s.turn(), 3);
    }
}
