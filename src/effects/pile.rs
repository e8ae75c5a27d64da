//! The shared pile and special-card effects.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Consecutive same-rank cards that clear the pile.
pub const FOUR_OF_A_KIND: usize = 4;

/// Cards played since the last clear. Only the top constrains legality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A pile holding `cards`, the last one on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from the bottom of the pile to the top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Empty the pile, returning its cards bottom to top.
    pub fn take(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Whether the last four cards share a rank.
    #[must_use]
    pub fn ends_in_four_of_a_kind(&self) -> bool {
        if self.cards.len() < FOUR_OF_A_KIND {
            return false;
        }
        let mut last = self.cards.iter().rev().take(FOUR_OF_A_KIND);
        match last.next() {
            Some(first) => last.all(|card| card.rank == first.rank),
            None => false,
        }
    }
}

/// Why a pile was cleared with a replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearCause {
    /// A 10 was played.
    Ten,
    /// The last four pile cards share a rank.
    FourOfAKind,
}

/// Outcome of a play on the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileEffect {
    /// Nothing special; the turn passes.
    Continue,
    /// A 6: the pile clears and the turn passes.
    Reset,
    /// The pile clears and the same participant plays again.
    ClearAndReplay(ClearCause),
}

impl PileEffect {
    /// Whether the acting participant keeps control.
    #[must_use]
    pub fn grants_replay(self) -> bool {
        matches!(self, PileEffect::ClearAndReplay(_))
    }
}

/// Effect of `played` on the pile it was just appended to.
///
/// The rank played decides first: a 6 resets and a 10 clears. Only then is
/// the pile checked for four of a kind, so four 6s played together reset
/// and pass the turn.
///
/// ```
/// use rust_palace::cards::Card;
/// use rust_palace::effects::{evaluate_effect, ClearCause, Pile, PileEffect};
///
/// let c = |s: &str| s.parse::<Card>().unwrap();
/// let pile = Pile::from_cards([c("7H"), c("7S"), c("7D"), c("7C")]);
/// assert_eq!(evaluate_effect(c("7C"), &pile), PileEffect::ClearAndReplay(ClearCause::FourOfAKind));
/// ```
#[must_use]
pub fn evaluate_effect(played: Card, pile_after_play: &Pile) -> PileEffect {
    match played.rank {
        Rank::Six => PileEffect::Reset,
        Rank::Ten => PileEffect::ClearAndReplay(ClearCause::Ten),
        _ if pile_after_play.ends_in_four_of_a_kind() => PileEffect::ClearAndReplay(ClearCause::FourOfAKind),
        _ => PileEffect::Continue,
    }
}
