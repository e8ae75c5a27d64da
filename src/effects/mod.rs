//! Pile effects.
//!
//! After every play the pile is inspected once:
//! - a 6 resets the pile (cleared, turn passes)
//! - a 10 clears it and the same participant plays again
//! - four consecutive cards of one rank clear it with a replay, whatever the rank

pub mod pile;

pub use pile::{evaluate_effect, ClearCause, Pile, PileEffect, FOUR_OF_A_KIND};
