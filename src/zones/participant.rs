//! Per-participant zone state and the zone-priority rule.
//!
//! A `Participant` owns three disjoint ordered zones. Which zone may be played
//! from is derived, never stored: the first non-empty zone in
//! [`Zone::PRIORITY`] order.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::zone::Zone;
use crate::cards::Card;
use crate::core::GameError;

/// Hand, face-up and face-down cards of one seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    hand: Vector<Card>,
    face_up: Vector<Card>,
    face_down: Vector<Card>,
}

impl Participant {
    /// Build a participant from explicit zone contents.
    ///
    /// ```
    /// use rust_palace::cards::Card;
    /// use rust_palace::zones::{Participant, Zone};
    ///
    /// let cards = |s: &str| s.split_whitespace().map(|c| c.parse::<Card>().unwrap()).collect::<Vec<_>>();
    /// let seat = Participant::from_zones(cards(""), cards("4H KD"), cards("9C"));
    /// assert_eq!(seat.active_zone(), Some(Zone::FaceUp));
    /// ```
    #[must_use]
    pub fn from_zones(
        hand: impl IntoIterator<Item = Card>,
        face_up: impl IntoIterator<Item = Card>,
        face_down: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            face_up: face_up.into_iter().collect(),
            face_down: face_down.into_iter().collect(),
        }
    }

    /// Cards in a zone, in stored order.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<Card> {
        match zone {
            Zone::Hand => &self.hand,
            Zone::FaceUp => &self.face_up,
            Zone::FaceDown => &self.face_down,
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vector<Card> {
        match zone {
            Zone::Hand => &mut self.hand,
            Zone::FaceUp => &mut self.face_up,
            Zone::FaceDown => &mut self.face_down,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn face_up(&self) -> &Vector<Card> {
        &self.face_up
    }

    #[must_use]
    pub fn face_down(&self) -> &Vector<Card> {
        &self.face_down
    }

    /// The zone this participant must play from, or `None` once all are empty.
    #[must_use]
    pub fn active_zone(&self) -> Option<Zone> {
        Zone::PRIORITY
            .into_iter()
            .find(|&zone| !self.zone(zone).is_empty())
    }

    /// Fail with `WrongZone` unless `zone` is the active zone.
    pub fn require_active(&self, zone: Zone) -> Result<(), GameError> {
        match self.active_zone() {
            Some(active) if active == zone => Ok(()),
            Some(active) => Err(GameError::WrongZone {
                attempted: zone,
                required: active,
            }),
            None => Err(GameError::GameOver),
        }
    }

    /// Cards across all three zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.face_up.len() + self.face_down.len()
    }

    /// Whether the next card played is this participant's last one.
    #[must_use]
    pub fn is_last_card(&self) -> bool {
        self.total_cards() == 1
    }

    /// All zones empty: this participant has won.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.total_cards() == 0
    }

    /// Card at a position, or `InvalidIndex`.
    pub fn card_at(&self, zone: Zone, index: usize) -> Result<Card, GameError> {
        self.zone(zone)
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex { zone, index })
    }

    /// Append a card to a zone.
    pub fn receive(&mut self, zone: Zone, card: Card) {
        self.zone_mut(zone).push_back(card);
    }

    /// Append cards to the hand, keeping their order.
    pub fn take_into_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Remove and return the card at a position.
    pub fn remove(&mut self, zone: Zone, index: usize) -> Result<Card, GameError> {
        let cards = self.zone_mut(zone);
        if index >= cards.len() {
            return Err(GameError::InvalidIndex { zone, index });
        }
        Ok(cards.remove(index))
    }

    /// Iterate over every card this participant holds.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().chain(self.face_up.iter()).chain(self.face_down.iter())
    }
}
