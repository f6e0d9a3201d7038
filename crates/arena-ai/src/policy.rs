//! The tactical policy tree.
//!
//! ```text
//! Selector
//!   ├─ Sequence [no threats]     → engage
//!   ├─ Sequence [one threat]     → duel
//!   └─ Sequence [two or more]    → survival
//! ```
//!
//! Branch order inside each subtree is the tactical priority; reordering
//! children changes behaviour.

use arena_core::{
    Action, ArenaDimensions, ArenaSnapshot, Bearing, DirectionClassification, EngineConfig,
    PlayerState, ThreatScanner,
};
use behavior_tree::builder::{inverter, selector, sequence};
use behavior_tree::Behavior;

use crate::context::{PolicyTree, TacticalContext};
use crate::decision::{Decision, Mode};
use crate::nodes::{
    Commit, FacingWall, SightFilter, Sighted, ThreatCountAtLeast, ThreatCountIs,
    TurnTowardWeakerFlank, WallTurn,
};

fn node<B: Behavior<TacticalContext> + 'static>(behavior: B) -> PolicyTree {
    Box::new(behavior)
}

fn commit(action: Action) -> PolicyTree {
    node(Commit(action))
}

/// `when` all guards hold, commit `action`.
fn when(guards: Vec<PolicyTree>, action: Action) -> PolicyTree {
    let mut children = guards;
    children.push(commit(action));
    sequence(children)
}

fn wall_turn() -> PolicyTree {
    sequence(vec![node(FacingWall), node(WallTurn)])
}

/// No threats: shoot whatever is ahead, else turn toward a target, else keep
/// off the walls and advance.
fn engage() -> PolicyTree {
    selector(vec![
        when(vec![node(Sighted::occupied(Bearing::Forward))], Action::Fire),
        node(TurnTowardWeakerFlank(SightFilter::Occupied)),
        when(vec![node(Sighted::occupied(Bearing::Left))], Action::TurnLeft),
        when(vec![node(Sighted::occupied(Bearing::Right))], Action::TurnRight),
        wall_turn(),
        commit(Action::Advance),
    ])
}

/// One threat: kill it if it is ahead, face it if it is on a flank, retreat
/// from it if it sits at the edge of range behind us.
fn duel(range: u32) -> PolicyTree {
    selector(vec![
        when(vec![node(Sighted::threat(Bearing::Forward))], Action::Fire),
        when(vec![node(Sighted::threat(Bearing::Left))], Action::TurnLeft),
        when(vec![node(Sighted::threat(Bearing::Right))], Action::TurnRight),
        when(vec![node(Sighted::obstruction(Bearing::Forward))], Action::Fire),
        node(TurnTowardWeakerFlank(SightFilter::Obstruction)),
        when(vec![node(Sighted::obstruction(Bearing::Left))], Action::TurnLeft),
        when(vec![node(Sighted::obstruction(Bearing::Right))], Action::TurnRight),
        when(
            vec![
                node(Sighted::threat(Bearing::Back).exactly(range)),
                inverter(node(Sighted::occupied(Bearing::Forward).within(1))),
                inverter(node(FacingWall)),
            ],
            Action::Advance,
        ),
        wall_turn(),
        commit(Action::Advance),
    ])
}

/// Two or more threats: never stand and shoot. Turn off a blocked or walled
/// path using the wall tie-break, otherwise move to break line of sight.
fn survival() -> PolicyTree {
    selector(vec![
        sequence(vec![
            selector(vec![
                node(Sighted::occupied(Bearing::Forward).within(1)),
                node(FacingWall),
            ]),
            node(WallTurn),
        ]),
        commit(Action::Advance),
    ])
}

/// Builds the full policy tree for the given scan range.
pub fn build_tree(config: &EngineConfig) -> PolicyTree {
    let range = config.range();
    selector(vec![
        sequence(vec![node(ThreatCountIs(0)), engage()]),
        sequence(vec![node(ThreatCountIs(1)), duel(range)]),
        sequence(vec![node(ThreatCountAtLeast(2)), survival()]),
    ])
}

/// Scanner plus policy tree. Immutable once built; share freely.
pub struct TacticalPolicy {
    scanner: ThreatScanner,
    tree: PolicyTree,
}

impl TacticalPolicy {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            scanner: ThreatScanner::new(&config),
            tree: build_tree(&config),
        }
    }

    /// Scans the snapshot and selects an action.
    pub fn decide(&self, snapshot: &ArenaSnapshot) -> Decision {
        let classification = self.scanner.scan(snapshot);
        let threat_count = classification.threat_count();
        let action = self.select(snapshot.me(), classification.clone(), snapshot.dimensions());
        let mode = Mode::from_threat_count(threat_count);

        tracing::debug!(
            player = %snapshot.self_id(),
            position = %snapshot.me().position,
            heading = %snapshot.me().heading,
            opponents = snapshot.opponent_count(),
            threats = threat_count,
            %mode,
            %action,
            "decided"
        );

        Decision {
            action,
            mode,
            threat_count,
            classification,
        }
    }

    /// Runs the policy tree over an existing classification.
    pub fn select(
        &self,
        me: &PlayerState,
        classification: DirectionClassification,
        dimensions: ArenaDimensions,
    ) -> Action {
        let mut ctx = TacticalContext::new(*me, dimensions, classification);
        let status = self.tree.tick(&mut ctx);

        match ctx.into_action() {
            Some(action) => action,
            None => {
                tracing::warn!(?status, "policy tree committed no action, advancing");
                Action::Advance
            }
        }
    }
}

impl Default for TacticalPolicy {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
