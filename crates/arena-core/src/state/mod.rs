//! Per-turn arena state.
//!
//! All types here are immutable once a snapshot is built. A snapshot is the
//! entire input to one decision and is dropped when the action is returned.
mod heading;
mod player;
mod position;
mod snapshot;

pub use heading::{Bearing, Heading};
pub use player::{PlayerId, PlayerState};
pub use position::{ArenaDimensions, Position};
pub use snapshot::ArenaSnapshot;
