//! Engine errors.
//!
//! Rejected actions never touch the state they were checked against, so every
//! recoverable error can be answered by re-rendering the unchanged state.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;
use crate::zones::Zone;

/// Everything the engine can refuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The selected card does not beat the top of the pile.
    #[error("{card} cannot be played on {top}")]
    IllegalMove { card: Card, top: Card },

    /// The action names a zone other than the one the participant must play from.
    #[error("cannot play from {attempted} while playing from {required}")]
    WrongZone { attempted: Zone, required: Zone },

    /// The action was submitted for the participant who is not on turn.
    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    /// A deal asked for more cards than the deck holds.
    #[error("deck underflow: needed {needed} cards, {available} available")]
    EmptyDeckUnderflow { needed: usize, available: usize },

    /// No card at that position.
    #[error("no card at {zone} position {index}")]
    InvalidIndex { zone: Zone, index: usize },

    /// A multi-play named cards of different ranks, or no cards at all.
    #[error("a multi-play needs one or more hand cards of a single rank")]
    MixedRanks,

    /// Pick-up requested while the pile is empty.
    #[error("the pile is empty")]
    EmptyPile,

    /// The game has a winner and accepts no further actions.
    #[error("the game is over")]
    GameOver,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot parse card '{0}'")]
    ParseCard(String),

    /// Card conservation check failed.
    #[error("integrity violation: {0}")]
    Integrity(String),
}

impl GameError {
    /// Whether the caller can simply re-decide and retry against the same state.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GameError::EmptyDeckUnderflow { .. }
                | GameError::InvalidConfig(_)
                | GameError::ParseCard(_)
                | GameError::Integrity(_)
        )
    }
}
