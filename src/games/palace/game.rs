//! Palace turn controller.

use tracing::{debug, info, trace};

use crate::cards::{Card, Rank};
use crate::core::{Action, GameConfig, GameError, GameRng, GameState, HandIndices, Phase, PlayerId};
use crate::effects::{evaluate_effect, PileEffect};
use crate::events::GameEvent;
use crate::rules::{can_play, check_play, compute_valid_moves, RulesEngine, ValidMoves};
use crate::zones::Zone;

/// Smallest same-rank group offered as a multi-play.
const MIN_GROUP: usize = 2;

/// Palace rules for one human against one bot.
///
/// Every `apply_*` method validates first and only then clones the state, so
/// an `Err` always leaves the caller's state exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct PalaceGame {
    config: GameConfig,
}

impl PalaceGame {
    /// Create a controller, rejecting an unusable configuration.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shuffle and deal, seeded from the config or from entropy.
    pub fn new_game(&self) -> Result<GameState, GameError> {
        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.deal(&mut rng)
    }

    /// Shuffle and deal from an explicit seed, ignoring the configured one.
    pub fn new_game_with_seed(&self, seed: u64) -> Result<GameState, GameError> {
        self.deal(&mut GameRng::new(seed))
    }

    fn deal(&self, rng: &mut GameRng) -> Result<GameState, GameError> {
        let state = GameState::deal(&self.config, rng)?;
        debug!(seed = state.seed(), deck = state.deck().len(), "dealt new game");
        Ok(state)
    }

    /// Legality map of the participant on turn, `None` once the game is over.
    #[must_use]
    pub fn valid_moves(&self, state: &GameState) -> Option<ValidMoves> {
        let player = state.active_player()?;
        Some(compute_valid_moves(state.participant(player), state.top_card()))
    }

    /// Play the card at `index` of `zone`.
    ///
    /// A face-down play is blind: the card is revealed here and, if it cannot
    /// go on the pile, the actor picks it up together with the pile.
    pub fn apply_play(
        &self,
        state: &GameState,
        player: PlayerId,
        zone: Zone,
        index: usize,
    ) -> Result<GameState, GameError> {
        check_turn(state, player)?;
        let seat = state.participant(player);
        seat.require_active(zone)?;
        let card = seat.card_at(zone, index)?;
        let top = state.top_card();
        let legal = can_play(card, top, seat.is_last_card());
        if !zone.is_blind() {
            check_play(card, top, seat.is_last_card())?;
        }

        let mut next = state.clone();
        next.begin(player, Action::play(zone, index));
        next.participant_mut(player).remove(zone, index)?;

        if legal {
            self.resolve_play(&mut next, player, zone, &[card]);
        } else {
            blind_miss(&mut next, player, card);
        }
        Ok(next)
    }

    /// Play several hand cards of one rank together.
    ///
    /// Duplicate positions count once. The cards land on the pile in
    /// ascending position order and the effect is judged once, on the
    /// last of them.
    pub fn apply_multi_play(
        &self,
        state: &GameState,
        player: PlayerId,
        indices: &[usize],
    ) -> Result<GameState, GameError> {
        check_turn(state, player)?;
        let seat = state.participant(player);
        seat.require_active(Zone::Hand)?;

        let mut positions: HandIndices = indices.iter().copied().collect();
        positions.sort_unstable();
        positions.dedup();

        let mut cards = Vec::with_capacity(positions.len());
        for &index in &positions {
            cards.push(seat.card_at(Zone::Hand, index)?);
        }
        let Some(&lead) = cards.first() else {
            return Err(GameError::MixedRanks);
        };
        if cards.iter().any(|card| card.rank != lead.rank) {
            return Err(GameError::MixedRanks);
        }
        check_play(lead, state.top_card(), seat.is_last_card())?;

        let mut next = state.clone();
        next.begin(
            player,
            Action::PlayMany {
                indices: positions.clone(),
            },
        );
        for &index in positions.iter().rev() {
            next.participant_mut(player).remove(Zone::Hand, index)?;
        }
        self.resolve_play(&mut next, player, Zone::Hand, &cards);
        Ok(next)
    }

    /// Take the whole pile into hand. The turn passes.
    pub fn apply_pick_up(&self, state: &GameState, player: PlayerId) -> Result<GameState, GameError> {
        check_turn(state, player)?;
        if state.pile().is_empty() {
            return Err(GameError::EmptyPile);
        }

        let mut next = state.clone();
        next.begin(player, Action::PickUp);
        let taken = next.pile.take();
        let count = taken.len();
        next.participant_mut(player).take_into_hand(taken);
        debug!(%player, count, "picked up the pile");
        next.emit(GameEvent::PickedUp { player, count });
        next.pass_turn(player.opponent());
        Ok(next)
    }

    /// Put already-removed `cards` on the pile and run the rest of the turn:
    /// effect, replenishment, win check, hand-over.
    fn resolve_play(&self, next: &mut GameState, player: PlayerId, zone: Zone, cards: &[Card]) {
        for &card in cards {
            next.pile.push(card);
        }
        debug!(%player, %zone, count = cards.len(), top = ?next.top_card(), "played");
        next.emit(GameEvent::Played {
            player,
            zone,
            cards: cards.to_vec(),
        });

        let effect = match next.top_card() {
            Some(played) => evaluate_effect(played, &next.pile),
            None => PileEffect::Continue,
        };
        match effect {
            PileEffect::Continue => {}
            PileEffect::Reset => {
                let burned = next.burn_pile();
                debug!(%player, burned, "pile reset");
                next.emit(GameEvent::PileReset { player });
            }
            PileEffect::ClearAndReplay(cause) => {
                let burned = next.burn_pile();
                debug!(%player, ?cause, burned, "pile cleared");
                next.emit(GameEvent::PileCleared { player, cause });
            }
        }

        if zone == Zone::Hand {
            self.replenish(next, player);
        }

        if next.participant(player).has_finished() {
            next.phase = Phase::GameOver { winner: player };
            info!(%player, turn = next.turn_number(), "game over");
            next.emit(GameEvent::Won { player });
            return;
        }

        if !effect.grants_replay() {
            next.pass_turn(player.opponent());
        }
    }

    /// Draw at most one card into a short hand.
    fn replenish(&self, next: &mut GameState, player: PlayerId) {
        if next.participant(player).hand().len() >= self.config.replenish_to {
            return;
        }
        if let Some(card) = next.deck.draw() {
            next.participant_mut(player).receive(Zone::Hand, card);
            trace!(%player, deck = next.deck().len(), "drew replenishment card");
            next.emit(GameEvent::Drew { player });
        }
    }
}

/// The game must be running and `player` on turn.
fn check_turn(state: &GameState, player: PlayerId) -> Result<(), GameError> {
    match state.phase() {
        Phase::GameOver { .. } => Err(GameError::GameOver),
        phase if phase.active_player() != Some(player) => Err(GameError::NotYourTurn { player }),
        _ => Ok(()),
    }
}

/// An unplayable face-down reveal: card and pile both go to the actor's hand.
fn blind_miss(next: &mut GameState, player: PlayerId, card: Card) {
    debug!(%player, %card, top = ?next.top_card(), "blind play missed");
    next.emit(GameEvent::BlindMiss { player, card });

    let mut taken = next.pile.take();
    taken.push_back(card);
    let count = taken.len();
    next.participant_mut(player).take_into_hand(taken);
    next.emit(GameEvent::PickedUp { player, count });
    next.pass_turn(player.opponent());
}

impl RulesEngine for PalaceGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if state.active_player() != Some(player) {
            return vec![];
        }

        let seat = state.participant(player);
        let top = state.top_card();
        let mut actions = Vec::new();

        match seat.active_zone() {
            Some(Zone::FaceDown) => {
                actions.extend((0..seat.face_down().len()).map(|index| Action::play(Zone::FaceDown, index)));
            }
            Some(zone) => {
                let moves = compute_valid_moves(seat, top);
                actions.extend(
                    moves
                        .options(zone)
                        .iter()
                        .filter(|option| option.playable)
                        .map(|option| Action::play(zone, option.index)),
                );
                if zone == Zone::Hand {
                    for rank in Rank::ALL {
                        let group: HandIndices = moves
                            .hand
                            .iter()
                            .filter(|option| option.playable && option.card.rank == rank)
                            .map(|option| option.index)
                            .collect();
                        if group.len() >= MIN_GROUP {
                            actions.push(Action::PlayMany { indices: group });
                        }
                    }
                }
            }
            None => {}
        }

        if !state.pile().is_empty() {
            actions.push(Action::PickUp);
        }
        actions
    }

    fn apply_action(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<GameState, GameError> {
        match action {
            Action::Play { zone, index } => self.apply_play(state, player, *zone, *index),
            Action::PlayMany { indices } => self.apply_multi_play(state, player, indices),
            Action::PickUp => self.apply_pick_up(state, player),
        }
    }
}
