//! Leaf nodes for the tactical policy tree.
//!
//! - [`conditions`]: read-only checks against the [`TacticalContext`](crate::TacticalContext)
//! - [`actions`]: nodes that commit an [`Action`](arena_core::Action)

pub mod actions;
pub mod conditions;

pub use actions::{Commit, TurnTowardWeakerFlank, WallTurn, wall_turn_bearing};
pub use conditions::{FacingWall, Reach, SightFilter, Sighted, ThreatCountAtLeast, ThreatCountIs};
