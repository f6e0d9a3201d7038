//! Condition nodes.
//!
//! Conditions inspect the scan and never commit an action.

use arena_core::{Bearing, DirectionReading, ThreatStatus};
use behavior_tree::{Behavior, Status};

use crate::TacticalContext;

/// Succeeds when exactly `n` opponents are aimed at us.
pub struct ThreatCountIs(pub usize);

impl Behavior<TacticalContext> for ThreatCountIs {
    fn tick(&self, ctx: &mut TacticalContext) -> Status {
        Status::from_bool(ctx.threat_count() == self.0)
    }
}

/// Succeeds when at least `n` opponents are aimed at us.
pub struct ThreatCountAtLeast(pub usize);

impl Behavior<TacticalContext> for ThreatCountAtLeast {
    fn tick(&self, ctx: &mut TacticalContext) -> Status {
        Status::from_bool(ctx.threat_count() >= self.0)
    }
}

/// Succeeds when the next step forward would leave the arena.
pub struct FacingWall;

impl Behavior<TacticalContext> for FacingWall {
    fn tick(&self, ctx: &mut TacticalContext) -> Status {
        Status::from_bool(ctx.facing_wall())
    }
}

/// Which statuses a [`Sighted`] check accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SightFilter {
    /// Blocked or WillBeHit.
    Occupied,
    /// WillBeHit only.
    Threat,
    /// Blocked only.
    Obstruction,
}

impl SightFilter {
    pub fn accepts(self, status: ThreatStatus) -> bool {
        match self {
            SightFilter::Occupied => status.is_occupied(),
            SightFilter::Threat => status == ThreatStatus::WillBeHit,
            SightFilter::Obstruction => status == ThreatStatus::Blocked,
        }
    }
}

/// Distance constraint for a [`Sighted`] check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach {
    Any,
    Within(u32),
    Exactly(u32),
}

impl Reach {
    pub fn accepts(self, distance: u32) -> bool {
        match self {
            Reach::Any => true,
            Reach::Within(max) => distance <= max,
            Reach::Exactly(expected) => distance == expected,
        }
    }
}

/// Checks the reading in one relative direction.
///
/// # Example
///
/// ```rust,ignore
/// // Fire when someone is directly ahead
/// sequence(vec![
///     Box::new(Sighted::occupied(Bearing::Forward)),
///     Box::new(Commit(Action::Fire)),
/// ])
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sighted {
    pub bearing: Bearing,
    pub filter: SightFilter,
    pub reach: Reach,
}

impl Sighted {
    pub const fn occupied(bearing: Bearing) -> Self {
        Self {
            bearing,
            filter: SightFilter::Occupied,
            reach: Reach::Any,
        }
    }

    pub const fn threat(bearing: Bearing) -> Self {
        Self {
            bearing,
            filter: SightFilter::Threat,
            reach: Reach::Any,
        }
    }

    pub const fn obstruction(bearing: Bearing) -> Self {
        Self {
            bearing,
            filter: SightFilter::Obstruction,
            reach: Reach::Any,
        }
    }

    #[must_use]
    pub const fn within(mut self, distance: u32) -> Self {
        self.reach = Reach::Within(distance);
        self
    }

    #[must_use]
    pub const fn exactly(mut self, distance: u32) -> Self {
        self.reach = Reach::Exactly(distance);
        self
    }

    pub fn matches(&self, reading: &DirectionReading) -> bool {
        self.filter.accepts(reading.status) && self.reach.accepts(reading.distance)
    }
}

impl Behavior<TacticalContext> for Sighted {
    fn tick(&self, ctx: &mut TacticalContext) -> Status {
        Status::from_bool(self.matches(ctx.reading(self.bearing)))
    }
}
