//! Bot policies.
//!
//! Policies are trait-based so a host or the self-play harness can swap them:
//! - `GreedyBot`: the house bot, plays the first card it can
//! - `RandomBot`: uniform over the engine's legal actions

use crate::core::{Action, GameRng, GameState, PlayerId};
use crate::rules::{compute_valid_moves, RulesEngine};
use crate::zones::Zone;

/// Chooses an action for a participant.
pub trait BotPolicy<E: RulesEngine>: Send + Sync {
    /// Choose an action for `player`.
    ///
    /// Returns `None` if `player` cannot act.
    fn choose_action(
        &self,
        engine: &E,
        state: &GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<Action>;
}

/// First playable card of the active zone, in stored order.
///
/// With only face-down cards left it plays the last one blind. With nothing
/// playable it picks up the pile. It never multi-plays; any further
/// same-rank cards wait for a later turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBot;

impl GreedyBot {
    /// The greedy choice, independent of any engine.
    #[must_use]
    pub fn decide(state: &GameState, player: PlayerId) -> Option<Action> {
        if state.active_player() != Some(player) {
            return None;
        }
        let seat = state.participant(player);
        let moves = compute_valid_moves(seat, state.top_card());

        if let Some((zone, option)) = moves.first_playable() {
            return Some(Action::play(zone, option.index));
        }
        if moves.face_down {
            let last = seat.face_down().len().checked_sub(1)?;
            return Some(Action::play(Zone::FaceDown, last));
        }
        Some(Action::PickUp)
    }
}

impl<E: RulesEngine> BotPolicy<E> for GreedyBot {
    fn choose_action(
        &self,
        _engine: &E,
        state: &GameState,
        player: PlayerId,
        _rng: &mut GameRng,
    ) -> Option<Action> {
        GreedyBot::decide(state, player)
    }
}

/// Uniform random legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBot;

impl<E: RulesEngine> BotPolicy<E> for RandomBot {
    fn choose_action(
        &self,
        engine: &E,
        state: &GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = engine.legal_actions(state, player);
        rng.choose(&actions).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck};
    use crate::core::{GameConfig, Phase};
    use crate::effects::Pile;
    use crate::games::PalaceGame;
    use crate::zones::Participant;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn bot_to_act(hand: &str, face_up: &str, face_down: &str, pile: &str) -> GameState {
        GameState::from_parts(
            Deck::from_cards(cards("")),
            Participant::from_zones(cards("2C"), cards("3C"), cards("4C")),
            Participant::from_zones(cards(hand), cards(face_up), cards(face_down)),
            Pile::from_cards(cards(pile)),
            Phase::BotTurn,
        )
    }

    #[test]
    fn test_greedy_first_playable_hand_card() {
        let state = bot_to_act("3D 9H QS", "AH", "2D", "8S");
        assert_eq!(GreedyBot::decide(&state, PlayerId::BOT), Some(Action::play(Zone::Hand, 1)));
    }

    #[test]
    fn test_greedy_face_up_then_blind() {
        let state = bot_to_act("", "2H KD", "2D", "QS");
        assert_eq!(GreedyBot::decide(&state, PlayerId::BOT), Some(Action::play(Zone::FaceUp, 1)));

        let state = bot_to_act("", "", "2D 5S 9H", "QS");
        assert_eq!(GreedyBot::decide(&state, PlayerId::BOT), Some(Action::play(Zone::FaceDown, 2)));
    }

    #[test]
    fn test_greedy_picks_up_when_stuck() {
        let state = bot_to_act("3D 4H", "", "", "KS");
        assert_eq!(GreedyBot::decide(&state, PlayerId::BOT), Some(Action::PickUp));
    }

    #[test]
    fn test_greedy_waits_for_its_turn() {
        let state = bot_to_act("3D", "", "", "");
        assert_eq!(GreedyBot::decide(&state, PlayerId::HUMAN), None);
    }

    #[test]
    fn test_random_bot_is_legal_and_seeded() {
        let game = PalaceGame::new(GameConfig::new()).unwrap();
        let state = bot_to_act("7H 7S 9C 2D", "", "", "5S");
        let legal = game.legal_actions(&state, PlayerId::BOT);

        let mut a = GameRng::new(11);
        let mut b = GameRng::new(11);
        for _ in 0..20 {
            let choice = RandomBot.choose_action(&game, &state, PlayerId::BOT, &mut a);
            assert!(legal.contains(choice.as_ref().unwrap()));
            assert_eq!(choice, RandomBot.choose_action(&game, &state, PlayerId::BOT, &mut b));
        }
        assert_eq!(RandomBot.choose_action(&game, &state, PlayerId::HUMAN, &mut a), None);
    }
}
