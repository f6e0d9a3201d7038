use crate::config::EngineConfig;
use crate::state::{ArenaSnapshot, Heading, PlayerId, PlayerState};

use super::{Contact, DirectionClassification, DirectionReading};

/// Computes the per-heading threat classification for one player.
///
/// Scanning walks distances outward (1, 2, 3 by default) and, at each
/// distance, all four headings. The first occupant met on an axis decides
/// that axis for the rest of the scan, so nearer players always shadow
/// farther ones. The walk ends at the farthest candidate in line of sight;
/// axes left unoccupied report Empty at the full range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreatScanner {
    range: u32,
}

impl ThreatScanner {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            range: config.range(),
        }
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    /// Classifies the snapshot from the controlled player's point of view.
    pub fn scan(&self, snapshot: &ArenaSnapshot) -> DirectionClassification {
        self.classify(snapshot.me(), snapshot.opponents())
    }

    /// Classifies `opponents` as seen from `me`.
    ///
    /// `opponents` must not contain `me`. When several opponents share a
    /// cell, the first one yielded is reported.
    pub fn classify<'a, I>(&self, me: &PlayerState, opponents: I) -> DirectionClassification
    where
        I: IntoIterator<Item = (&'a PlayerId, &'a PlayerState)>,
    {
        let origin = me.position;
        let candidates: Vec<(&PlayerId, &PlayerState)> = opponents
            .into_iter()
            .filter(|(_, player)| origin.in_line_within(player.position, self.range))
            .collect();

        let reach = candidates
            .iter()
            .map(|(_, player)| {
                origin.x.abs_diff(player.position.x) + origin.y.abs_diff(player.position.y)
            })
            .max()
            .unwrap_or(0);

        let mut readings: [Option<DirectionReading>; 4] = Default::default();
        for distance in 1..=reach {
            for heading in Heading::ALL {
                let slot = &mut readings[heading.index()];
                if slot.is_some() {
                    continue;
                }

                let cell = origin.step(heading, distance);
                let Some(&(id, player)) = candidates.iter().find(|(_, p)| p.position == cell)
                else {
                    continue;
                };
                let contact = Contact {
                    id: id.clone(),
                    player: *player,
                };

                *slot = Some(if player.is_aimed_back_along(heading) {
                    DirectionReading::will_be_hit(distance, contact)
                } else {
                    DirectionReading::blocked(distance, contact)
                });
            }
        }

        let range = self.range;
        DirectionClassification::from_readings(
            readings.map(|reading| reading.unwrap_or_else(|| DirectionReading::empty(range))),
        )
    }
}

impl Default for ThreatScanner {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
