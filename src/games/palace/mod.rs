//! Palace (also known as Shithead) for one human and one bot.
//!
//! - Each participant holds a hand, three face-up and three face-down cards
//! - Play a card at least as strong as the pile top, or pick the pile up
//! - 6 resets the pile, 10 or four of a kind clears it and grants a replay
//! - First to empty all three zones wins

mod game;

pub use game::PalaceGame;
