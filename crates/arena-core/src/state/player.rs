use core::fmt;

use super::{Heading, Position};

/// Opaque player identifier. The arena uses each player's service URL.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One player's state for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub heading: Heading,
    pub score: i32,
    pub was_hit: bool,
}

impl PlayerState {
    pub const fn new(position: Position, heading: Heading) -> Self {
        Self {
            position,
            heading,
            score: 0,
            was_hit: false,
        }
    }

    #[must_use]
    pub const fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub const fn with_was_hit(mut self, was_hit: bool) -> Self {
        self.was_hit = was_hit;
        self
    }

    /// True when this player faces straight down `from`, i.e. a player
    /// standing in direction `from` of a target is aimed back at it.
    pub fn is_aimed_back_along(&self, from: Heading) -> bool {
        self.heading == from.opposite()
    }
}
