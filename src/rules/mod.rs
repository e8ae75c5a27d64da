//! Move legality and the rules engine trait.
//!
//! - `legality`: rank order, wild ranks, `can_play`, per-zone valid moves
//! - `engine`: the `RulesEngine` trait the controller implements and bots drive

pub mod engine;
pub mod legality;

pub use engine::{GameResult, RulesEngine};
pub use legality::{
    can_play, check_play, compute_valid_moves, is_wild, strength, MoveOption, ValidMoves, RANK_ORDER,
};
