//! Events emitted by game transitions.

pub mod event;

pub use event::GameEvent;
