//! Blackboard for a single decision.
//!
//! The [`TacticalContext`] is built from one scan and dropped once the policy
//! tree has committed an action. Condition nodes read it; action nodes write
//! the verdict through [`TacticalContext::commit`].

use arena_core::{
    Action, ArenaDimensions, Bearing, DirectionClassification, DirectionReading, Heading,
    PlayerState,
};
use behavior_tree::Behavior;

/// Shared, immutable policy tree.
pub type PolicyTree = Box<dyn Behavior<TacticalContext>>;

pub struct TacticalContext {
    /// The controlled player.
    pub me: PlayerState,

    pub dimensions: ArenaDimensions,

    /// Scan result keyed by absolute heading.
    pub classification: DirectionClassification,

    threat_count: usize,

    /// Set by the first action node that fires; `None` until then.
    action: Option<Action>,
}

impl TacticalContext {
    pub fn new(
        me: PlayerState,
        dimensions: ArenaDimensions,
        classification: DirectionClassification,
    ) -> Self {
        let threat_count = classification.threat_count();
        Self {
            me,
            dimensions,
            classification,
            threat_count,
            action: None,
        }
    }

    pub fn heading(&self) -> Heading {
        self.me.heading
    }

    /// Reading in a direction relative to our own heading.
    pub fn reading(&self, bearing: Bearing) -> &DirectionReading {
        self.classification.relative(self.me.heading, bearing)
    }

    /// Number of opponents aimed at us.
    pub fn threat_count(&self) -> usize {
        self.threat_count
    }

    /// True when stepping forward would leave the arena.
    pub fn facing_wall(&self) -> bool {
        self.dimensions.faces_wall(self.me.position, self.me.heading)
    }

    pub fn commit(&mut self, action: Action) {
        self.action = Some(action);
    }

    pub fn into_action(self) -> Option<Action> {
        self.action
    }
}
