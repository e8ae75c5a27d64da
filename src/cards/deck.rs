//! The 52-card draw deck and the opening deal.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{GameError, GameRng, SEAT_COUNT};
use crate::zones::{Participant, Zone};

/// Cards in a standard deck without jokers.
pub const DECK_SIZE: usize = 52;

/// The draw deck. Cards are drawn from the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// All 52 cards, suit by suit, in face-value order.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A standard deck in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Self::standard().cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// A deck holding exactly `cards`, the last one on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from the bottom of the deck to the top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Deal `per_zone` cards into each zone of both participants.
    ///
    /// Order: face-down (A, B alternating), then face-up, then hand. Nothing
    /// is dealt when the deck is too small.
    pub fn deal(
        &mut self,
        first: &mut Participant,
        second: &mut Participant,
        per_zone: usize,
    ) -> Result<(), GameError> {
        let needed = per_zone
            .checked_mul(Zone::PRIORITY.len() * SEAT_COUNT)
            .ok_or(GameError::EmptyDeckUnderflow {
                needed: usize::MAX,
                available: self.len(),
            })?;
        if self.len() < needed {
            return Err(GameError::EmptyDeckUnderflow {
                needed,
                available: self.len(),
            });
        }

        for zone in [Zone::FaceDown, Zone::FaceUp, Zone::Hand] {
            for _ in 0..per_zone {
                for seat in [&mut *first, &mut *second] {
                    let card = self.draw().ok_or(GameError::EmptyDeckUnderflow {
                        needed,
                        available: 0,
                    })?;
                    seat.receive(zone, card);
                }
            }
        }
        Ok(())
    }
}
