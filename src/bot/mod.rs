//! Computer opponents.

pub mod policy;

pub use policy::{BotPolicy, GreedyBot, RandomBot};
