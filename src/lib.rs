//! # rust-palace
//!
//! Rules engine for Palace (also known as Shithead), one human against a bot.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: every action is
//!    `(&GameState, action) -> Result<GameState, GameError>`. The input state
//!    is never touched, and a rejected action changes nothing.
//!
//! 2. **Rank-Only Rules**: suit is cosmetic. Legality depends on the rank of
//!    the pile top, the wild ranks 6 and 10, and the last-card jack.
//!
//! 3. **Cards Are Conserved**: the 52 cards are always split across deck,
//!    seats, pile and discard. `GameState::integrity_check` verifies it.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: cheap state clones via `im-rs`.
//!
//! - **Events**: each transition records what happened as `GameEvent`s, which
//!   hosts turn into status lines.
//!
//! - **Seeded Randomness**: ChaCha8 shuffles make every deal reproducible.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration, errors
//! - `cards`: card values and the deck
//! - `zones`: hand, face-up and face-down zones of a participant
//! - `rules`: rank order, legality and the `RulesEngine` trait
//! - `effects`: the pile and its reset/clear effects
//! - `events`: what each transition did
//! - `games`: the Palace turn controller
//! - `bot`: computer opponents
//! - `session`: the interactive host session and self-play

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod effects;
pub mod events;
pub mod games;
pub mod bot;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, HandIndices,
    GameConfig, GameError,
    PlayerId, PlayerMap,
    GameRng,
    GameState, Phase,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::zones::{Participant, Zone};

pub use crate::rules::{can_play, compute_valid_moves, GameResult, MoveOption, RulesEngine, ValidMoves};

pub use crate::effects::{evaluate_effect, ClearCause, Pile, PileEffect};

pub use crate::events::GameEvent;

pub use crate::games::PalaceGame;

pub use crate::bot::{BotPolicy, GreedyBot, RandomBot};

pub use crate::session::{self_play, Session, SelfPlayConfig, SelfPlayOutcome};
