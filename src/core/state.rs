//! Game state: deck, seats, pile, phase and history.
//!
//! `GameState` is a value. Transitions in [`crate::games::palace`] clone it,
//! change the clone and hand it back, so the state a caller holds never
//! changes underneath them. The `im` collections inside make that clone cheap.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::error::GameError;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Deck, DECK_SIZE};
use crate::effects::Pile;
use crate::events::GameEvent;
use crate::zones::Participant;

/// Whose turn it is, or who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    BotTurn,
    GameOver { winner: PlayerId },
}

impl Phase {
    /// The phase in which `player` is to act.
    #[must_use]
    pub fn turn_of(player: PlayerId) -> Self {
        if player == PlayerId::HUMAN {
            Phase::PlayerTurn
        } else {
            Phase::BotTurn
        }
    }

    /// The participant to act, `None` once the game is over.
    #[must_use]
    pub fn active_player(self) -> Option<PlayerId> {
        match self {
            Phase::PlayerTurn => Some(PlayerId::HUMAN),
            Phase::BotTurn => Some(PlayerId::BOT),
            Phase::GameOver { .. } => None,
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) players: PlayerMap<Participant>,
    pub(crate) pile: Pile,

    /// Cards burned by pile clears, out of play for the rest of the game.
    pub(crate) discard: Vector<Card>,

    pub(crate) phase: Phase,

    /// Seed of the opening shuffle.
    pub(crate) seed: u64,

    /// Turn number (starts at 1, advances when control changes hands).
    pub(crate) turn_number: u32,

    /// Accepted actions so far.
    pub(crate) action_sequence: u32,

    pub(crate) history: Vector<ActionRecord>,

    /// Events of the most recent transition.
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Shuffle and deal a fresh game. The human opens.
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Result<Self, GameError> {
        config.validate()?;

        let mut deck = Deck::shuffled(rng);
        let mut human = Participant::default();
        let mut bot = Participant::default();
        deck.deal(&mut human, &mut bot, config.deal_size)?;

        Ok(Self {
            deck,
            players: PlayerMap::from_pair(human, bot),
            pile: Pile::new(),
            discard: Vector::new(),
            phase: Phase::PlayerTurn,
            seed: rng.seed(),
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            events: vec![GameEvent::Dealt { seed: rng.seed() }],
        })
    }

    /// Assemble a state from explicit parts, e.g. to set up a position.
    ///
    /// No conservation check is made; call [`GameState::integrity_check`]
    /// when the parts are meant to hold a full deck.
    #[must_use]
    pub fn from_parts(deck: Deck, human: Participant, bot: Participant, pile: Pile, phase: Phase) -> Self {
        Self {
            deck,
            players: PlayerMap::from_pair(human, bot),
            pile,
            discard: Vector::new(),
            phase,
            seed: 0,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn participant(&self, player: PlayerId) -> &Participant {
        &self.players[player]
    }

    #[must_use]
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.pile.top()
    }

    /// Cards burned by pile clears.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.phase.active_player()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.phase.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Cards across deck, both seats, the pile and the discard.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.pile.len()
            + self.discard.len()
            + self.players.iter().map(|(_, seat)| seat.total_cards()).sum::<usize>()
    }

    /// Check that exactly the 52 distinct cards are in play.
    pub fn integrity_check(&self) -> Result<(), GameError> {
        let mut seen: FxHashSet<Card> = FxHashSet::default();
        let all = self
            .deck
            .iter()
            .chain(self.pile.iter())
            .chain(self.discard.iter())
            .chain(self.players.iter().flat_map(|(_, seat)| seat.all_cards()));
        for card in all {
            if !seen.insert(*card) {
                return Err(GameError::Integrity(format!("{card} appears twice")));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(GameError::Integrity(format!(
                "{} cards in play, expected {DECK_SIZE}",
                seen.len()
            )));
        }
        Ok(())
    }

    // === Transition helpers ===

    pub(crate) fn participant_mut(&mut self, player: PlayerId) -> &mut Participant {
        &mut self.players[player]
    }

    /// Start a transition: clear the previous events and log the action.
    pub(crate) fn begin(&mut self, player: PlayerId, action: Action) {
        self.events.clear();
        let record = ActionRecord::new(player, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Move the whole pile to the discard, returning how many cards burned.
    pub(crate) fn burn_pile(&mut self) -> usize {
        let burned = self.pile.take();
        let count = burned.len();
        self.discard.append(burned);
        count
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        trace!(turn = self.turn_number(), "{event}");
        self.events.push(event);
    }

    /// Hand control to `player`.
    pub(crate) fn pass_turn(&mut self, to: PlayerId) {
        self.phase = Phase::turn_of(to);
        self.turn_number += 1;
        self.emit(GameEvent::TurnPassed { to });
    }
}
