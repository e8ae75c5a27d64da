//! End-to-end game flow tests.
//!
//! These tests drive `PalaceGame` through whole turns:
//! - Opening deal and the first exchange between human and bot
//! - Pile effects and who acts next
//! - Pick-ups, blind misses and winning
//! - Rebuilding a game from its seed and history

mod common;

use common::{cards, init_logging, position};
use rust_palace::rules::is_wild;
use rust_palace::session::Policies;
use rust_palace::{
    self_play, Action, ClearCause, GameConfig, GameError, GameEvent, GreedyBot, PalaceGame, Phase, PlayerId,
    PlayerMap, RandomBot, RulesEngine, Zone,
};

fn game() -> PalaceGame {
    PalaceGame::new(GameConfig::new()).unwrap()
}

/// Test the opening deal and one full exchange of turns.
#[test]
fn test_opening_exchange() {
    init_logging();
    let game = game();

    // Find a deal whose opening hand holds a non-wild card.
    let (state, index) = (0..100u64)
        .find_map(|seed| {
            let state = game.new_game_with_seed(seed).unwrap();
            let index = state
                .participant(PlayerId::HUMAN)
                .hand()
                .iter()
                .position(|card| !is_wild(card.rank))?;
            Some((state, index))
        })
        .expect("some deal has a non-wild card in hand");

    assert_eq!(state.deck().len(), 34);
    for player in PlayerId::all() {
        let seat = state.participant(player);
        assert_eq!(seat.hand().len(), 3);
        assert_eq!(seat.face_up().len(), 3);
        assert_eq!(seat.face_down().len(), 3);
    }

    let after_human = game.apply_play(&state, PlayerId::HUMAN, Zone::Hand, index).unwrap();
    assert_eq!(after_human.pile().len(), 1);
    assert_eq!(after_human.phase(), Phase::BotTurn);
    assert_eq!(after_human.participant(PlayerId::HUMAN).hand().len(), 3);
    assert_eq!(after_human.deck().len(), 33);

    // The bot answers greedily until control comes back.
    let mut state = after_human;
    for _ in 0..10 {
        if state.phase() != Phase::BotTurn {
            break;
        }
        let action = GreedyBot::decide(&state, PlayerId::BOT).unwrap();
        state = game.apply_action(&state, PlayerId::BOT, &action).unwrap();
    }
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert!(state.integrity_check().is_ok());
}

/// Test that the greedy bot follows its fixed preference order.
#[test]
fn test_bot_reply_is_greedy() {
    let game = game();
    let state = position(["4D", "5D", "7D"], ["3S 9S KS", "AC", "2C"], "8H", "", Phase::BotTurn);

    let action = GreedyBot::decide(&state, PlayerId::BOT).unwrap();
    assert_eq!(action, Action::play(Zone::Hand, 1));

    let next = game.apply_action(&state, PlayerId::BOT, &action).unwrap();
    assert_eq!(next.top_card(), Some("9S".parse().unwrap()));
    assert_eq!(next.phase(), Phase::PlayerTurn);
}

/// Test four of a kind built across both participants.
#[test]
fn test_four_of_a_kind_across_players() {
    let game = game();
    let state = position(["7H 2D", "", ""], ["7S 7D 3C", "", ""], "5C", "", Phase::PlayerTurn);

    let state = game.apply_play(&state, PlayerId::HUMAN, Zone::Hand, 0).unwrap();
    let state = game.apply_multi_play(&state, PlayerId::BOT, &[0, 1]).unwrap();
    assert_eq!(state.pile().len(), 4);
    assert_eq!(state.phase(), Phase::PlayerTurn);

    let human = position(["7C 2D", "", ""], ["3C", "", ""], "5C 7H 7S 7D", "", Phase::PlayerTurn);
    let next = game.apply_play(&human, PlayerId::HUMAN, Zone::Hand, 0).unwrap();
    assert!(next.pile().is_empty());
    assert_eq!(next.phase(), Phase::PlayerTurn);
    assert!(next.events().contains(&GameEvent::PileCleared {
        player: PlayerId::HUMAN,
        cause: ClearCause::FourOfAKind,
    }));
    assert_eq!(next.discard().len(), 5);
}

/// Test that four 6s in one multi-play reset the pile and pass the turn.
#[test]
fn test_four_sixes_reset() {
    let game = game();
    let state = position(["6H 6S 6D 6C 2H", "", ""], ["3C", "", ""], "KS", "", Phase::PlayerTurn);

    let next = game.apply_multi_play(&state, PlayerId::HUMAN, &[0, 1, 2, 3]).unwrap();
    assert!(next.pile().is_empty());
    assert_eq!(next.discard().len(), 5);
    assert_eq!(next.phase(), Phase::BotTurn);
    assert!(next.events().contains(&GameEvent::PileReset { player: PlayerId::HUMAN }));
    assert!(!next
        .events()
        .iter()
        .any(|event| matches!(event, GameEvent::PileCleared { .. })));
}

/// Test that picking up moves exactly the pile into hand.
#[test]
fn test_pick_up_moves_pile() {
    let game = game();
    let state = position(["2H 3H", "4H", "5H"], ["2C", "3C", "4C"], "9S JS QS", "", Phase::PlayerTurn);

    let next = game.apply_pick_up(&state, PlayerId::HUMAN).unwrap();
    assert!(next.pile().is_empty());

    let mut expected: Vec<_> = state.participant(PlayerId::HUMAN).hand().iter().copied().collect();
    expected.extend(state.pile().iter().copied());
    let hand: Vec<_> = next.participant(PlayerId::HUMAN).hand().iter().copied().collect();
    assert_eq!(hand, expected);
    assert_eq!(next.total_cards(), state.total_cards());
}

/// Test the forced pick-up after an unplayable blind card.
#[test]
fn test_blind_miss_takes_pile() {
    let game = game();
    let state = position(["", "", "3D 8D"], ["2C", "3C", "4C"], "9S KS", "", Phase::PlayerTurn);

    let next = game.apply_play(&state, PlayerId::HUMAN, Zone::FaceDown, 0).unwrap();
    let hand: Vec<_> = next.participant(PlayerId::HUMAN).hand().iter().copied().collect();
    assert_eq!(hand, cards("9S KS 3D"));
    assert_eq!(next.participant(PlayerId::HUMAN).face_down().len(), 1);
    assert!(next.pile().is_empty());
    assert_eq!(next.phase(), Phase::BotTurn);
    assert_eq!(next.total_cards(), state.total_cards());

    // Control is with the bot now.
    assert_eq!(
        game.apply_play(&next, PlayerId::BOT, Zone::Hand, 0).map(|_| ()),
        Ok(())
    );
    assert_eq!(
        game.apply_play(&next, PlayerId::HUMAN, Zone::FaceDown, 0),
        Err(GameError::NotYourTurn { player: PlayerId::HUMAN })
    );
}

/// Test that the game ends on the winning play and rejects everything after.
#[test]
fn test_win_stops_play() {
    let game = game();
    let state = position(["", "KD", ""], ["2C", "3C", "4C"], "QS", "", Phase::PlayerTurn);

    let over = game.apply_play(&state, PlayerId::HUMAN, Zone::FaceUp, 0).unwrap();
    assert_eq!(over.phase(), Phase::GameOver { winner: PlayerId::HUMAN });
    assert_eq!(game.is_terminal(&over).map(|result| result.winner), Some(PlayerId::HUMAN));

    for player in PlayerId::all() {
        assert!(game.legal_actions(&over, player).is_empty());
        assert_eq!(game.apply_pick_up(&over, player), Err(GameError::GameOver));
        assert_eq!(game.apply_play(&over, player, Zone::Hand, 0), Err(GameError::GameOver));
    }
}

/// Test that replenishment stops once the deck is empty.
#[test]
fn test_replenish_until_deck_runs_out() {
    let game = game();
    let state = position(["4H 5H", "", ""], ["2C", "3C", "4C"], "", "9D", Phase::PlayerTurn);

    let next = game.apply_play(&state, PlayerId::HUMAN, Zone::Hand, 0).unwrap();
    assert_eq!(next.participant(PlayerId::HUMAN).hand().len(), 2);
    assert!(next.deck().is_empty());
    assert!(next.events().contains(&GameEvent::Drew { player: PlayerId::HUMAN }));

    let full = position(["4H 5H 7H 8H", "", ""], ["2C", "3C", "4C"], "", "9D", Phase::PlayerTurn);
    let next = game.apply_play(&full, PlayerId::HUMAN, Zone::Hand, 0).unwrap();
    assert_eq!(next.participant(PlayerId::HUMAN).hand().len(), 3);
    assert_eq!(next.deck().len(), 1);
}

/// Test that a seed and an action history rebuild the same game.
#[test]
fn test_replay_from_history() {
    init_logging();
    let game = game();
    let policies: Policies<'_, PalaceGame> = PlayerMap::from_pair(&RandomBot, &GreedyBot);
    let dealt = game.new_game_with_seed(77).unwrap();

    let outcome = self_play(&game, &dealt, &policies, 150).unwrap();

    let mut replayed = game.new_game_with_seed(77).unwrap();
    for record in outcome.state.history() {
        replayed = game.apply_action(&replayed, record.player, &record.action).unwrap();
    }
    assert_eq!(replayed, outcome.state);
}
