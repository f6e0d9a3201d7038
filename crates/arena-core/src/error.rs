//! Snapshot validation errors.
//!
//! The engine never guesses around a malformed turn: anything that would make
//! the threat scan meaningless is rejected here, before any decision logic
//! runs. Callers map these onto their own response codes.

use crate::state::{ArenaDimensions, PlayerId, Position};

/// A turn snapshot that cannot be decided on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("self player {0} not found in arena state")]
    MissingSelf(PlayerId),

    #[error("arena dims must contain exactly two values, got {0}")]
    DimensionCount(usize),

    #[error("arena dims {width}x{height} must both be positive")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("player {player} at {position} is outside the {dimensions} arena")]
    OutOfBounds {
        player: PlayerId,
        position: Position,
        dimensions: ArenaDimensions,
    },
}

impl SnapshotError {
    /// Stable identifier for this variant, suitable for response bodies and
    /// log fields.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSelf(_) => "missing_self",
            Self::DimensionCount(_) => "invalid_dims",
            Self::InvalidDimensions { .. } => "invalid_dims",
            Self::OutOfBounds { .. } => "out_of_bounds",
        }
    }
}
