//! Rank ordering and move legality.
//!
//! Strength comparison is rank-only. The wild ranks 6 and 10 sit outside the
//! ordering: they can always be played, and their pile effects (reset and
//! clear) live in [`crate::effects`].

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::GameError;
use crate::zones::{Participant, Zone};

/// Strength order of the non-wild ranks, weakest first.
pub const RANK_ORDER: [Rank; 11] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Whether a rank bypasses the strength order.
#[must_use]
pub const fn is_wild(rank: Rank) -> bool {
    matches!(rank, Rank::Six | Rank::Ten)
}

/// Position of a rank in [`RANK_ORDER`].
///
/// Wild ranks rank above the whole scale: a wild left on top of a pile can
/// only be answered by another wild (or the last-card jack).
#[must_use]
pub fn strength(rank: Rank) -> usize {
    RANK_ORDER
        .iter()
        .position(|&r| r == rank)
        .unwrap_or(RANK_ORDER.len())
}

/// Whether `card` may be played onto a pile topped by `top`.
///
/// ```
/// use rust_palace::cards::Card;
/// use rust_palace::rules::can_play;
///
/// let c = |s: &str| s.parse::<Card>().unwrap();
/// assert!(can_play(c("3H"), Some(c("2S")), false));
/// assert!(!can_play(c("2H"), Some(c("3S")), false));
/// assert!(can_play(c("6D"), Some(c("AS")), false));
/// assert!(can_play(c("JD"), Some(c("AS")), true));
/// ```
#[must_use]
pub fn can_play(card: Card, top: Option<Card>, is_last_card: bool) -> bool {
    let Some(top) = top else {
        return true;
    };
    if is_wild(card.rank) {
        return true;
    }
    if is_last_card && card.rank == Rank::Jack {
        return true;
    }
    strength(card.rank) >= strength(top.rank)
}

/// [`can_play`] as a `Result`, naming the card and the top it failed against.
pub fn check_play(card: Card, top: Option<Card>, is_last_card: bool) -> Result<(), GameError> {
    match top {
        Some(top) if !can_play(card, Some(top), is_last_card) => {
            Err(GameError::IllegalMove { card, top })
        }
        _ => Ok(()),
    }
}

/// Legality of one card position in the active zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    pub index: usize,
    pub card: Card,
    pub playable: bool,
}

/// Per-zone legality map for UI highlighting.
///
/// At most one of `hand`, `face_up` is non-empty, and `face_down` is set only
/// when both are empty: only the active zone is ever reported.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidMoves {
    pub hand: Vec<MoveOption>,
    pub face_up: Vec<MoveOption>,
    /// A blind face-down play is permitted.
    pub face_down: bool,
}

impl ValidMoves {
    /// Options of the given visible zone.
    #[must_use]
    pub fn options(&self, zone: Zone) -> &[MoveOption] {
        match zone {
            Zone::Hand => &self.hand,
            Zone::FaceUp => &self.face_up,
            Zone::FaceDown => &[],
        }
    }

    /// Whether any play at all is available. A blind play always counts.
    #[must_use]
    pub fn has_playable(&self) -> bool {
        self.face_down
            || self.hand.iter().any(|o| o.playable)
            || self.face_up.iter().any(|o| o.playable)
    }

    /// First playable position of the visible active zone, in stored order.
    #[must_use]
    pub fn first_playable(&self) -> Option<(Zone, MoveOption)> {
        [Zone::Hand, Zone::FaceUp]
            .into_iter()
            .find_map(|zone| self.options(zone).iter().find(|o| o.playable).map(|o| (zone, *o)))
    }
}

/// Legality of every card in the participant's active zone against `top`.
#[must_use]
pub fn compute_valid_moves(participant: &Participant, top: Option<Card>) -> ValidMoves {
    let is_last_card = participant.is_last_card();
    let options = |zone: Zone| -> Vec<MoveOption> {
        participant
            .zone(zone)
            .iter()
            .enumerate()
            .map(|(index, &card)| MoveOption {
                index,
                card,
                playable: can_play(card, top, is_last_card),
            })
            .collect()
    };

    match participant.active_zone() {
        Some(Zone::Hand) => ValidMoves {
            hand: options(Zone::Hand),
            ..ValidMoves::default()
        },
        Some(Zone::FaceUp) => ValidMoves {
            face_up: options(Zone::FaceUp),
            ..ValidMoves::default()
        },
        Some(Zone::FaceDown) => ValidMoves {
            face_down: true,
            ..ValidMoves::default()
        },
        None => ValidMoves::default(),
    }
}
