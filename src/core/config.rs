//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Configuration for a Palace game.
///
/// Builder-style setters mirror the defaults of the classic table game:
/// three cards per zone, hands kept at three while the deck lasts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the opening shuffle.
    /// `None` draws a fresh seed per game; the seed used is kept on the state.
    pub seed: Option<u64>,

    /// Cards dealt into each of the three zones of each participant.
    pub deal_size: usize,

    /// A play from hand draws one card while the hand holds fewer than this.
    pub replenish_to: usize,

    /// Pause a host should leave before letting the bot act, in milliseconds.
    /// Presentation only; the engine never waits.
    pub bot_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            deal_size: 3,
            replenish_to: 3,
            bot_delay_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of cards dealt per zone.
    pub fn with_deal_size(mut self, deal_size: usize) -> Self {
        self.deal_size = deal_size;
        self
    }

    /// Set the hand size replenishment draws toward.
    pub fn with_replenish_to(mut self, replenish_to: usize) -> Self {
        self.replenish_to = replenish_to;
        self
    }

    /// Set the bot presentation delay.
    pub fn with_bot_delay_ms(mut self, delay: u64) -> Self {
        self.bot_delay_ms = delay;
        self
    }

    /// Reject configurations no game can be played with.
    ///
    /// A deal larger than the deck is left to the deal itself, which reports
    /// `EmptyDeckUnderflow`.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.deal_size == 0 {
            return Err(GameError::InvalidConfig("deal_size must be at least 1".into()));
        }
        if self.replenish_to == 0 {
            return Err(GameError::InvalidConfig("replenish_to must be at least 1".into()));
        }
        Ok(())
    }
}
