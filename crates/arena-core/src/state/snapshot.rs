use std::collections::BTreeMap;

use super::{ArenaDimensions, PlayerId, PlayerState};
use crate::error::SnapshotError;

/// Validated input to one decision.
///
/// Construction enforces the snapshot invariants: the arena has positive
/// extent, the controlled player is present, and every player stands inside
/// the arena. Opponents are kept ordered by identifier so that scans which
/// pick "the first player at a cell" are deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaSnapshot {
    dimensions: ArenaDimensions,
    self_id: PlayerId,
    me: PlayerState,
    opponents: BTreeMap<PlayerId, PlayerState>,
}

impl ArenaSnapshot {
    /// Builds a snapshot from the full roster, which must include `self_id`.
    pub fn new<I>(
        dimensions: ArenaDimensions,
        roster: I,
        self_id: PlayerId,
    ) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = (PlayerId, PlayerState)>,
    {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(SnapshotError::InvalidDimensions {
                width: i64::from(dimensions.width),
                height: i64::from(dimensions.height),
            });
        }

        let mut opponents = BTreeMap::new();
        for (id, player) in roster {
            if !dimensions.contains(player.position) {
                return Err(SnapshotError::OutOfBounds {
                    player: id,
                    position: player.position,
                    dimensions,
                });
            }
            opponents.insert(id, player);
        }

        let me = opponents
            .remove(&self_id)
            .ok_or_else(|| SnapshotError::MissingSelf(self_id.clone()))?;

        Ok(Self {
            dimensions,
            self_id,
            me,
            opponents,
        })
    }

    pub fn dimensions(&self) -> ArenaDimensions {
        self.dimensions
    }

    pub fn self_id(&self) -> &PlayerId {
        &self.self_id
    }

    /// The controlled player.
    pub fn me(&self) -> &PlayerState {
        &self.me
    }

    /// Everyone except the controlled player, ordered by identifier.
    pub fn opponents(&self) -> impl Iterator<Item = (&PlayerId, &PlayerState)> {
        self.opponents.iter()
    }

    pub fn opponent_count(&self) -> usize {
        self.opponents.len()
    }
}
