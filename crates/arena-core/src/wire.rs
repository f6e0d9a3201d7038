//! JSON wire format of the arena's per-turn update.
//!
//! ```json
//! {
//!   "_links": { "self": { "href": "https://me.example" } },
//!   "arena": {
//!     "dims": [12, 9],
//!     "state": {
//!       "https://me.example": { "x": 3, "y": 4, "direction": "N", "score": 0, "wasHit": false }
//!     }
//!   }
//! }
//! ```
//!
//! Decoding only checks types; [`ArenaSnapshot`] conversion enforces the
//! snapshot invariants.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::state::{ArenaDimensions, ArenaSnapshot, Heading, PlayerId, PlayerState, Position};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaUpdate {
    #[serde(rename = "_links")]
    pub links: Links,
    pub arena: ArenaPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Href,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Href {
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaPayload {
    /// `[width, height]`.
    pub dims: Vec<i64>,
    pub state: HashMap<String, PlayerPayload>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    pub x: i32,
    pub y: i32,
    pub direction: Heading,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub was_hit: bool,
}

impl From<PlayerPayload> for PlayerState {
    fn from(payload: PlayerPayload) -> Self {
        PlayerState::new(Position::new(payload.x, payload.y), payload.direction)
            .with_score(payload.score)
            .with_was_hit(payload.was_hit)
    }
}

impl ArenaPayload {
    fn dimensions(&self) -> Result<ArenaDimensions, SnapshotError> {
        let [width, height] = self.dims[..] else {
            return Err(SnapshotError::DimensionCount(self.dims.len()));
        };
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(ArenaDimensions::new(w, h)),
            _ => Err(SnapshotError::InvalidDimensions { width, height }),
        }
    }
}

impl TryFrom<ArenaUpdate> for ArenaSnapshot {
    type Error = SnapshotError;

    fn try_from(update: ArenaUpdate) -> Result<Self, Self::Error> {
        let dimensions = update.arena.dimensions()?;
        let roster = update
            .arena
            .state
            .into_iter()
            .map(|(id, payload)| (PlayerId::from(id), PlayerState::from(payload)));

        ArenaSnapshot::new(dimensions, roster, PlayerId::from(update.links.self_link.href))
    }
}
