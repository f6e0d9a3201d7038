//! Action nodes.
//!
//! Each node commits an [`Action`] to the context and succeeds, or declines
//! with `Failure` so the enclosing selector moves on.

use arena_core::{Action, Bearing, Heading};
use behavior_tree::{Behavior, Status};

use super::SightFilter;
use crate::TacticalContext;

/// Commits a fixed action.
pub struct Commit(pub Action);

impl Behavior<TacticalContext> for Commit {
    fn tick(&self, ctx: &mut TacticalContext) -> Status {
        ctx.commit(self.0);
        Status::Success
    }
}

/// Flank to turn toward when backing off the wall ahead.
///
/// The choice depends only on heading and the coordinate across it:
///
/// | heading | rule                          |
/// |---------|-------------------------------|
/// | North   | Left unless `x == 0`          |
/// | South   | Right unless `x == 0`         |
/// | West    | Left if `y == 0`, else Right  |
/// | East    | Right if `y == 0`, else Left  |
pub fn wall_turn_bearing(ctx: &TacticalContext) -> Bearing {
    let position = ctx.me.position;
    match ctx.heading() {
        Heading::North if position.x != 0 => Bearing::Left,
        Heading::North => Bearing::Right,
        Heading::South if position.x != 0 => Bearing::Right,
        Heading::South => Bearing::Left,
        Heading::West if position.y == 0 => Bearing::Left,
        Heading::West => Bearing::Right,
        Heading::East if position.y == 0 => Bearing::Right,
        Heading::East => Bearing::Left,
    }
}

fn turn(bearing: Bearing) -> Action {
    match bearing {
        Bearing::Right => Action::TurnRight,
        _ => Action::TurnLeft,
    }
}

/// Turns away from the wall using [`wall_turn_bearing`].
pub struct WallTurn;

impl Behavior<TacticalContext> for WallTurn {
    fn tick(&self, ctx: &mut TacticalContext) -> Status {
        let bearing = wall_turn_bearing(ctx);
        ctx.commit(turn(bearing));
        Status::Success
    }
}

/// When both flanks match `filter`, turns toward the one held by the
/// lower-scoring player. Equal scores turn left.
pub struct TurnTowardWeakerFlank(pub SightFilter);

impl Behavior<TacticalContext> for TurnTowardWeakerFlank {
    fn tick(&self, ctx: &mut TacticalContext) -> Status {
        let left = ctx.reading(Bearing::Left);
        let right = ctx.reading(Bearing::Right);
        if !(self.0.accepts(left.status) && self.0.accepts(right.status)) {
            return Status::Failure;
        }

        let action = if left.contact_score() <= right.contact_score() {
            Action::TurnLeft
        } else {
            Action::TurnRight
        };
        ctx.commit(action);
        Status::Success
    }
}
