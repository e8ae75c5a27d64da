//! Driving whole games: the interactive host session and bot self-play.

pub mod driver;
pub mod self_play;

pub use driver::Session;
pub use self_play::{play_games, self_play, win_counts, Policies, SelfPlayConfig, SelfPlayOutcome};
