//! Game implementations built on the engine.

pub mod palace;

pub use palace::PalaceGame;
