//! Self-play loop: two policies play a game to the end.
//!
//! Used for property tests, benchmarks and bot comparisons. No human is
//! involved; seat 0 is simply driven by a policy too.

use tracing::debug;

use crate::bot::BotPolicy;
use crate::core::{GameError, GameRng, GameState, PlayerId, PlayerMap};
use crate::games::PalaceGame;
use crate::rules::{GameResult, RulesEngine};

/// The policy driving each seat.
pub type Policies<'a, E> = PlayerMap<&'a dyn BotPolicy<E>>;

/// Configuration for a batch of self-play games.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Maximum actions per game (random policies can trade pick-ups for a while).
    pub max_actions: usize,

    /// Seed of the first game; game `i` uses `seed_offset + i`.
    pub seed_offset: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_actions: 2_000,
            seed_offset: 0,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum actions per game.
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// How a self-play game ended.
#[derive(Clone, Debug)]
pub struct SelfPlayOutcome {
    /// `None` if the action cap was hit or a policy had nothing to do.
    pub result: Option<GameResult>,

    /// Actions applied.
    pub actions: usize,

    /// The last state reached.
    pub state: GameState,
}

impl SelfPlayOutcome {
    /// Whether the game reached a winner.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }
}

/// Play from `state` until someone wins or `max_actions` have been applied.
///
/// The policies draw randomness from a fork of the state's deal seed, so the
/// same dealt state and policies always play the same game.
/// A policy that proposes an illegal action aborts the game with that error.
pub fn self_play<E: RulesEngine>(
    engine: &E,
    state: &GameState,
    policies: &Policies<'_, E>,
    max_actions: usize,
) -> Result<SelfPlayOutcome, GameError> {
    let mut rng = GameRng::new(state.seed()).fork();
    let mut state = state.clone();
    let mut actions = 0;

    while actions < max_actions {
        if let Some(result) = engine.is_terminal(&state) {
            return Ok(SelfPlayOutcome {
                result: Some(result),
                actions,
                state,
            });
        }

        let Some(player) = state.active_player() else {
            break;
        };
        let Some(action) = policies[player].choose_action(engine, &state, player, &mut rng) else {
            debug!(%player, "policy found no action");
            break;
        };

        state = engine.apply_action(&state, player, &action)?;
        actions += 1;
    }

    Ok(SelfPlayOutcome {
        result: engine.is_terminal(&state),
        actions,
        state,
    })
}

/// Deal and play `count` games, one seed per game.
pub fn play_games(
    game: &PalaceGame,
    policies: &Policies<'_, PalaceGame>,
    config: &SelfPlayConfig,
    count: usize,
) -> Result<Vec<SelfPlayOutcome>, GameError> {
    (0..count)
        .map(|i| {
            let seed = config.seed_offset.wrapping_add(i as u64);
            let state = game.new_game_with_seed(seed)?;
            self_play(game, &state, policies, config.max_actions)
        })
        .collect()
}

/// Games won per seat across a batch.
#[must_use]
pub fn win_counts(outcomes: &[SelfPlayOutcome]) -> PlayerMap<usize> {
    let mut wins = PlayerMap::with_default();
    for player in PlayerId::all() {
        wins[player] = outcomes
            .iter()
            .filter_map(|outcome| outcome.result)
            .filter(|result| result.is_winner(player))
            .count();
    }
    wins
}
