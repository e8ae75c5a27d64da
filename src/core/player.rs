//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A Palace table has exactly two seats: the human (`PlayerId::HUMAN`, seat 0)
//! and the bot (`PlayerId::BOT`, seat 1). The human always opens.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access, indexable by
//! `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a Palace table.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier. Indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The human seat. Acts first in every new game.
    pub const HUMAN: PlayerId = PlayerId(0);

    /// The bot seat.
    pub const BOT: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat at a two-seat table.
    ///
    /// ```
    /// use rust_palace::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::HUMAN.opponent(), PlayerId::BOT);
    /// assert_eq!(PlayerId::BOT.opponent(), PlayerId::HUMAN);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlayerId::HUMAN => write!(f, "Player"),
            PlayerId::BOT => write!(f, "Bot"),
            PlayerId(other) => write!(f, "Seat {}", other),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use rust_palace::core::{PlayerId, PlayerMap};
///
/// let mut picked_up: PlayerMap<u32> = PlayerMap::with_default();
/// picked_up[PlayerId::BOT] += 4;
/// assert_eq!(picked_up[PlayerId::HUMAN], 0);
/// assert_eq!(picked_up[PlayerId::BOT], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Build a map from the human's and the bot's values.
    pub fn from_pair(human: T, bot: T) -> Self {
        Self {
            data: vec![human, bot],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
