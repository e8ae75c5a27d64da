//! Card system: card values and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`, `Card`: immutable card values (suit is cosmetic)
//! - `Deck`: the shuffled 52-card draw stack and the opening deal

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
