//! Host session: one human against the bot.
//!
//! `Session` owns the current state and a status line. The host forwards
//! clicks to `play`, `play_rank` and `pick_up`, then, while `bot_pending`
//! holds, waits `bot_delay` and calls `run_bot`. A rejected action leaves the
//! state alone and only changes the message.

use std::time::Duration;

use tracing::{debug, warn};

use crate::bot::{BotPolicy, GreedyBot};
use crate::core::{GameConfig, GameError, GameRng, GameState, Phase, PlayerId};
use crate::effects::ClearCause;
use crate::events::GameEvent;
use crate::games::PalaceGame;
use crate::rules::{RulesEngine, ValidMoves};
use crate::zones::Zone;

pub const MSG_OPENING: &str = "Your turn. Click a card to play or pick up if you can't play.";
pub const MSG_INVALID: &str = "Invalid move. Pick up the pile if you can't play.";
pub const MSG_YOUR_TURN: &str = "Your turn.";
pub const MSG_BOT_TURN: &str = "Bot's turn.";
pub const MSG_YOU_PICKED_UP: &str = "You picked up the pile. Bot's turn.";
pub const MSG_BOT_PICKED_UP: &str = "Bot picked up the pile. Your turn.";
pub const MSG_RESET: &str = "Played a 6. Pile reset. Play any card.";
pub const MSG_CLEARED: &str = "Played a 10. Pile cleared. Play again.";
pub const MSG_FOUR_OF_A_KIND: &str = "Four identical cards. Pile cleared. Play again.";
pub const MSG_YOU_WIN: &str = "Congratulations! You win!";
pub const MSG_BOT_WINS: &str = "Game over. Bot wins!";

/// One human-vs-bot game in memory.
pub struct Session {
    game: PalaceGame,
    state: GameState,
    bot: Box<dyn BotPolicy<PalaceGame>>,
    rng: GameRng,
    message: String,
}

impl Session {
    /// Deal a new game against the greedy bot.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_bot(config, Box::new(GreedyBot))
    }

    /// Deal a new game against a custom bot.
    pub fn with_bot(config: GameConfig, bot: Box<dyn BotPolicy<PalaceGame>>) -> Result<Self, GameError> {
        let game = PalaceGame::new(config)?;
        let state = game.new_game()?;
        Ok(Self::assemble(game, state, bot))
    }

    /// Continue from an existing state, e.g. one restored with serde.
    pub fn resume(config: GameConfig, state: GameState) -> Result<Self, GameError> {
        Self::resume_with_bot(config, state, Box::new(GreedyBot))
    }

    /// Continue from an existing state against a custom bot.
    ///
    /// The bot's random stream restarts from the state's seed.
    pub fn resume_with_bot(
        config: GameConfig,
        state: GameState,
        bot: Box<dyn BotPolicy<PalaceGame>>,
    ) -> Result<Self, GameError> {
        let game = PalaceGame::new(config)?;
        let mut session = Self::assemble(game, state, bot);
        session.message = match session.state.phase() {
            Phase::PlayerTurn => MSG_YOUR_TURN.to_string(),
            Phase::BotTurn => MSG_BOT_TURN.to_string(),
            Phase::GameOver { winner } => winner_message(winner).to_string(),
        };
        Ok(session)
    }

    fn assemble(game: PalaceGame, state: GameState, bot: Box<dyn BotPolicy<PalaceGame>>) -> Self {
        let rng = GameRng::new(state.seed()).fork();
        Self {
            game,
            state,
            bot,
            rng,
            message: MSG_OPENING.to_string(),
        }
    }

    /// Throw the current game away and deal a new one.
    ///
    /// With a fixed seed in the config the same deal comes back.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.state = self.game.new_game()?;
        self.rng = GameRng::new(self.state.seed()).fork();
        self.message = MSG_OPENING.to_string();
        debug!(seed = self.state.seed(), "session restarted");
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Status line for the player.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// What the human may play, `None` unless it is the human's turn.
    #[must_use]
    pub fn valid_moves(&self) -> Option<ValidMoves> {
        if self.state.active_player() != Some(PlayerId::HUMAN) {
            return None;
        }
        self.game.valid_moves(&self.state)
    }

    /// The bot is on turn and waiting for `run_bot`.
    #[must_use]
    pub fn bot_pending(&self) -> bool {
        self.state.phase() == Phase::BotTurn
    }

    /// Pause to leave before `run_bot`.
    #[must_use]
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.game.config().bot_delay_ms)
    }

    /// The human plays the card at `index` of `zone`.
    pub fn play(&mut self, zone: Zone, index: usize) -> Result<(), GameError> {
        let next = self.game.apply_play(&self.state, PlayerId::HUMAN, zone, index);
        self.commit(next)
    }

    /// The human plays several hand cards of one rank.
    pub fn play_rank(&mut self, indices: &[usize]) -> Result<(), GameError> {
        let next = self.game.apply_multi_play(&self.state, PlayerId::HUMAN, indices);
        self.commit(next)
    }

    /// The human picks up the pile.
    pub fn pick_up(&mut self) -> Result<(), GameError> {
        let next = self.game.apply_pick_up(&self.state, PlayerId::HUMAN);
        self.commit(next)
    }

    /// Let the bot act until control returns to the human or the game ends.
    ///
    /// Returns the number of actions the bot took.
    pub fn run_bot(&mut self) -> Result<usize, GameError> {
        let mut taken = 0;
        while self.bot_pending() {
            let Some(action) = self
                .bot
                .choose_action(&self.game, &self.state, PlayerId::BOT, &mut self.rng)
            else {
                warn!("bot found no action on its turn");
                break;
            };
            debug!(?action, "bot acts");
            self.state = self.game.apply_action(&self.state, PlayerId::BOT, &action)?;
            self.message = describe(self.state.events());
            taken += 1;
        }
        Ok(taken)
    }

    fn commit(&mut self, next: Result<GameState, GameError>) -> Result<(), GameError> {
        match next {
            Ok(state) => {
                self.state = state;
                self.message = describe(self.state.events());
                Ok(())
            }
            Err(err) => {
                debug!(%err, "human action rejected");
                self.message = MSG_INVALID.to_string();
                Err(err)
            }
        }
    }
}

fn winner_message(winner: PlayerId) -> &'static str {
    if winner == PlayerId::HUMAN {
        MSG_YOU_WIN
    } else {
        MSG_BOT_WINS
    }
}

/// Status line for the events of one transition. The most significant
/// event wins: a win, then a pile effect, then a pick-up, then the hand-over.
fn describe(events: &[GameEvent]) -> String {
    let find = |pick: fn(&GameEvent) -> Option<String>| events.iter().find_map(pick);

    find(|event| match event {
        GameEvent::Won { player } => Some(winner_message(*player).to_string()),
        _ => None,
    })
    .or_else(|| {
        find(|event| match event {
            GameEvent::PileReset { .. } => Some(MSG_RESET.to_string()),
            GameEvent::PileCleared { cause: ClearCause::Ten, .. } => Some(MSG_CLEARED.to_string()),
            GameEvent::PileCleared {
                cause: ClearCause::FourOfAKind,
                ..
            } => Some(MSG_FOUR_OF_A_KIND.to_string()),
            _ => None,
        })
    })
    .or_else(|| {
        find(|event| match event {
            GameEvent::BlindMiss { player, card } if *player == PlayerId::HUMAN => {
                Some(format!("You revealed {card} and picked up the pile. Bot's turn."))
            }
            GameEvent::BlindMiss { card, .. } => {
                Some(format!("Bot revealed {card} and picked up the pile. Your turn."))
            }
            GameEvent::PickedUp { player, .. } if *player == PlayerId::HUMAN => {
                Some(MSG_YOU_PICKED_UP.to_string())
            }
            GameEvent::PickedUp { .. } => Some(MSG_BOT_PICKED_UP.to_string()),
            _ => None,
        })
    })
    .or_else(|| {
        find(|event| match event {
            GameEvent::TurnPassed { to } if *to == PlayerId::HUMAN => Some(MSG_YOUR_TURN.to_string()),
            GameEvent::TurnPassed { .. } => Some(MSG_BOT_TURN.to_string()),
            _ => None,
        })
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::RandomBot;
    use crate::cards::{Card, Deck};
    use crate::core::Action;
    use crate::effects::Pile;
    use crate::zones::Participant;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    /// Always takes the pile when it can.
    struct HoarderBot;

    impl BotPolicy<PalaceGame> for HoarderBot {
        fn choose_action(
            &self,
            engine: &PalaceGame,
            state: &GameState,
            player: PlayerId,
            _rng: &mut GameRng,
        ) -> Option<Action> {
            let actions = engine.legal_actions(state, player);
            actions
                .iter()
                .find(|action| **action == Action::PickUp)
                .or_else(|| actions.first())
                .cloned()
        }
    }

    fn resume(human: Participant, bot: Participant, pile: &str, phase: Phase) -> Session {
        let state = GameState::from_parts(Deck::from_cards(cards("")), human, bot, Pile::from_cards(cards(pile)), phase);
        Session::resume(GameConfig::new(), state).unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(GameConfig::new().with_seed(5).with_bot_delay_ms(250)).unwrap();
        assert_eq!(session.message(), MSG_OPENING);
        assert!(!session.bot_pending());
        assert!(session.valid_moves().is_some());
        assert_eq!(session.bot_delay(), Duration::from_millis(250));
        assert_eq!(session.state().seed(), 5);
    }

    #[test]
    fn test_invalid_move_keeps_state() {
        let mut session = resume(
            Participant::from_zones(cards("2H 5D"), cards("3C"), cards("4C")),
            Participant::from_zones(cards("2C"), cards("5C"), cards("7C")),
            "9S",
            Phase::PlayerTurn,
        );
        let before = session.state().clone();

        assert!(session.play(Zone::Hand, 0).is_err());
        assert_eq!(session.message(), MSG_INVALID);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_pick_up_then_bot_answers() {
        let mut session = resume(
            Participant::from_zones(cards("2H 5D"), cards("3C"), cards("4C")),
            Participant::from_zones(cards("8C 9C"), cards("5C"), cards("7C")),
            "9S",
            Phase::PlayerTurn,
        );

        session.pick_up().unwrap();
        assert_eq!(session.message(), MSG_YOU_PICKED_UP);
        assert!(session.bot_pending());
        assert!(session.valid_moves().is_none());

        // Pile is empty, so the greedy bot plays its first hand card.
        assert_eq!(session.run_bot().unwrap(), 1);
        assert!(!session.bot_pending());
        assert_eq!(session.message(), MSG_YOUR_TURN);
        assert_eq!(session.state().top_card(), Some("8C".parse().unwrap()));
    }

    #[test]
    fn test_ten_message_and_replay() {
        let mut session = resume(
            Participant::from_zones(cards("10H 5D"), cards("3C"), cards("4C")),
            Participant::from_zones(cards("8C"), cards("5C"), cards("7C")),
            "KS",
            Phase::PlayerTurn,
        );
        session.play(Zone::Hand, 0).unwrap();
        assert_eq!(session.message(), MSG_CLEARED);
        assert!(!session.bot_pending());
    }

    #[test]
    fn test_bot_replays_after_clear_and_wins() {
        let mut session = resume(
            Participant::from_zones(cards("2H"), cards("3C"), cards("4C")),
            Participant::from_zones(cards("10C 9C"), cards(""), cards("")),
            "KS",
            Phase::BotTurn,
        );
        assert_eq!(session.message(), MSG_BOT_TURN);

        // 10 clears, the bot goes again and empties its hand with the 9.
        assert_eq!(session.run_bot().unwrap(), 2);
        assert_eq!(session.state().winner(), Some(PlayerId::BOT));
        assert_eq!(session.message(), MSG_BOT_WINS);
        assert!(session.play(Zone::Hand, 0).is_err());
        assert_eq!(session.message(), MSG_INVALID);
    }

    #[test]
    fn test_resume_keeps_custom_bot() {
        let state = GameState::from_parts(
            Deck::from_cards(cards("")),
            Participant::from_zones(cards("2H 5D"), cards("3C"), cards("4C")),
            Participant::from_zones(cards("KC 9C"), cards("5C"), cards("7C")),
            Pile::from_cards(cards("5S")),
            Phase::BotTurn,
        );

        // The greedy bot would answer with the king.
        let mut greedy = Session::resume(GameConfig::new(), state.clone()).unwrap();
        greedy.run_bot().unwrap();
        assert_eq!(greedy.state().top_card(), Some("KC".parse().unwrap()));

        let mut hoarder = Session::resume_with_bot(GameConfig::new(), state, Box::new(HoarderBot)).unwrap();
        assert_eq!(hoarder.message(), MSG_BOT_TURN);
        assert_eq!(hoarder.run_bot().unwrap(), 1);
        assert_eq!(hoarder.message(), MSG_BOT_PICKED_UP);
        assert_eq!(hoarder.state().participant(PlayerId::BOT).hand().len(), 3);
        assert!(hoarder.state().pile().is_empty());
    }

    #[test]
    fn test_restart() {
        let mut session = Session::with_bot(GameConfig::new().with_seed(8), Box::new(RandomBot)).unwrap();
        let dealt = session.state().clone();
        session.play(Zone::Hand, 0).unwrap();
        session.restart().unwrap();
        assert_eq!(session.state(), &dealt);
        assert_eq!(session.message(), MSG_OPENING);
    }

    #[test]
    fn test_describe_priority() {
        let events = [
            GameEvent::Played {
                player: PlayerId::HUMAN,
                zone: Zone::Hand,
                cards: cards("6H"),
            },
            GameEvent::PileReset { player: PlayerId::HUMAN },
            GameEvent::TurnPassed { to: PlayerId::BOT },
        ];
        assert_eq!(describe(&events), MSG_RESET);
        assert_eq!(describe(&[GameEvent::Won { player: PlayerId::HUMAN }]), MSG_YOU_WIN);
        assert_eq!(describe(&[]), "");
    }
}
