//! The three per-participant card zones.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A participant's card container.
///
/// Zones are played strictly in [`Zone::PRIORITY`] order: a zone becomes
/// playable only once every zone before it is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Visible to the owner only. Replenished from the deck.
    Hand,
    /// Visible to everyone.
    FaceUp,
    /// Visible to no one; played blind.
    FaceDown,
}

impl Zone {
    /// Play priority, highest first.
    pub const PRIORITY: [Zone; 3] = [Zone::Hand, Zone::FaceUp, Zone::FaceDown];

    /// Whether the owner sees the cards before committing to a play.
    #[must_use]
    pub const fn is_blind(self) -> bool {
        matches!(self, Zone::FaceDown)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Zone::Hand => "hand",
            Zone::FaceUp => "face-up",
            Zone::FaceDown => "face-down",
        })
    }
}
