//! Action representation.
//!
//! A participant does one of three things on their turn:
//! - play the card at one position of their active zone
//! - play several hand cards of the same rank together
//! - pick up the pile

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::zones::Zone;

/// Hand positions of a multi-play. Four covers every rank without spilling.
pub type HandIndices = SmallVec<[usize; 4]>;

/// A complete game action.
///
/// ```
/// use rust_palace::core::Action;
/// use rust_palace::zones::Zone;
///
/// let single = Action::play(Zone::Hand, 0);
/// let pair = Action::play_many(&[0, 2]);
/// assert_eq!(single, Action::Play { zone: Zone::Hand, index: 0 });
/// assert!(matches!(pair, Action::PlayMany { ref indices } if indices.as_slice() == [0, 2]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `index` of `zone`.
    Play { zone: Zone, index: usize },

    /// Play every listed hand position at once. All must share a rank.
    PlayMany { indices: HandIndices },

    /// Take the whole pile into hand.
    PickUp,
}

impl Action {
    /// Single-card play.
    #[must_use]
    pub fn play(zone: Zone, index: usize) -> Self {
        Action::Play { zone, index }
    }

    /// Same-rank multi-play from hand.
    #[must_use]
    pub fn play_many(indices: &[usize]) -> Self {
        Action::PlayMany {
            indices: SmallVec::from_slice(indices),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the game.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
