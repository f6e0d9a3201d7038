//! Tactical decision engine for the arena agent.
//!
//! # Architecture
//!
//! ```text
//! ArenaSnapshot
//!   └─→ ThreatScanner (arena-core)   per-heading classification
//!         └─→ TacticalContext         blackboard for one decision
//!               └─→ policy tree       engage | duel | survival
//!                     └─→ Action      F / L / R / T
//! ```
//!
//! The policy is a priority [`behavior_tree::Selector`]: the first branch
//! whose guards hold commits the action. Trees are immutable and shared, and
//! every decision builds its own context, so [`decide_action`] can be called
//! from any number of threads at once.

pub mod context;
pub mod decision;
pub mod nodes;
pub mod policy;

pub use context::{PolicyTree, TacticalContext};
pub use decision::{Decision, Mode};
pub use policy::TacticalPolicy;

use std::sync::LazyLock;

use arena_core::{Action, ArenaSnapshot};

static DEFAULT_POLICY: LazyLock<TacticalPolicy> = LazyLock::new(TacticalPolicy::default);

/// Picks this turn's action using the default engine configuration.
pub fn decide_action(snapshot: &ArenaSnapshot) -> Action {
    DEFAULT_POLICY.decide(snapshot).action
}
