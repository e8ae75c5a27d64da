//! Game event types.
//!
//! Every accepted action produces a short list of events describing what
//! happened, in order. Hosts turn them into status lines and tests assert
//! on them. `Display` gives the neutral line the engine traces per event.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::effects::ClearCause;
use crate::zones::Zone;

/// Something that happened during a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was shuffled from `seed` and dealt.
    Dealt { seed: u64 },

    /// Cards went from a zone onto the pile.
    Played {
        player: PlayerId,
        zone: Zone,
        cards: Vec<Card>,
    },

    /// A 6 reset the pile.
    PileReset { player: PlayerId },

    /// The pile was cleared and `player` goes again.
    PileCleared { player: PlayerId, cause: ClearCause },

    /// A replenishment draw from the deck. The card stays private.
    Drew { player: PlayerId },

    /// A face-down card was revealed that could not be played.
    BlindMiss { player: PlayerId, card: Card },

    /// The pile went into a hand.
    PickedUp { player: PlayerId, count: usize },

    /// Control passed to `player`.
    TurnPassed { to: PlayerId },

    /// All of `player`'s zones are empty.
    Won { player: PlayerId },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Dealt { seed } => write!(f, "New game dealt (seed {seed})"),
            GameEvent::Played { player, zone, cards } => {
                let cards: Vec<String> = cards.iter().map(Card::to_string).collect();
                write!(f, "{player} played {} from {zone}", cards.join(" "))
            }
            GameEvent::PileReset { player } => write!(f, "{player} reset the pile with a 6"),
            GameEvent::PileCleared { player, cause: ClearCause::Ten } => {
                write!(f, "{player} cleared the pile with a 10")
            }
            GameEvent::PileCleared {
                player,
                cause: ClearCause::FourOfAKind,
            } => write!(f, "{player} cleared the pile with four of a kind"),
            GameEvent::Drew { player } => write!(f, "{player} drew a card"),
            GameEvent::BlindMiss { player, card } => {
                write!(f, "{player} revealed {card} and cannot play it")
            }
            GameEvent::PickedUp { player, count } => {
                write!(f, "{player} picked up the pile ({count} cards)")
            }
            GameEvent::TurnPassed { to } => write!(f, "{to}'s turn"),
            GameEvent::Won { player } => write!(f, "{player} wins"),
        }
    }
}
