use crate::state::{Bearing, Heading, PlayerId, PlayerState};

/// What a scan found along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ThreatStatus {
    /// Nothing within range.
    Empty,
    /// The nearest occupant is not aimed at us.
    Blocked,
    /// The nearest occupant faces us and can land a hit this turn.
    WillBeHit,
}

impl ThreatStatus {
    /// Blocked or WillBeHit: a shot along this axis would land.
    pub const fn is_occupied(self) -> bool {
        matches!(self, ThreatStatus::Blocked | ThreatStatus::WillBeHit)
    }
}

/// The player responsible for a non-empty reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: PlayerId,
    pub player: PlayerState,
}

/// Classification of a single axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionReading {
    pub status: ThreatStatus,
    /// Step distance at which `status` was observed.
    pub distance: u32,
    pub contact: Option<Contact>,
}

impl DirectionReading {
    pub const fn empty(distance: u32) -> Self {
        Self {
            status: ThreatStatus::Empty,
            distance,
            contact: None,
        }
    }

    pub fn blocked(distance: u32, contact: Contact) -> Self {
        Self {
            status: ThreatStatus::Blocked,
            distance,
            contact: Some(contact),
        }
    }

    pub fn will_be_hit(distance: u32, contact: Contact) -> Self {
        Self {
            status: ThreatStatus::WillBeHit,
            distance,
            contact: Some(contact),
        }
    }

    pub const fn is_occupied(&self) -> bool {
        self.status.is_occupied()
    }

    pub fn is_threat(&self) -> bool {
        self.status == ThreatStatus::WillBeHit
    }

    /// Score of the responsible player, if any.
    pub fn contact_score(&self) -> Option<i32> {
        self.contact.as_ref().map(|contact| contact.player.score)
    }
}

/// Per-heading scan result for one turn, keyed by absolute heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionClassification {
    readings: [DirectionReading; 4],
}

impl DirectionClassification {
    pub(crate) fn from_readings(readings: [DirectionReading; 4]) -> Self {
        Self { readings }
    }

    pub fn get(&self, heading: Heading) -> &DirectionReading {
        &self.readings[heading.index()]
    }

    /// Reading for a direction relative to `facing`.
    pub fn relative(&self, facing: Heading, bearing: Bearing) -> &DirectionReading {
        self.get(facing.towards(bearing))
    }

    /// Number of axes with an opponent aimed at us.
    pub fn threat_count(&self) -> usize {
        self.readings.iter().filter(|r| r.is_threat()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Heading, &DirectionReading)> {
        Heading::ALL.into_iter().map(|heading| (heading, self.get(heading)))
    }
}
