//! Core behavior trait.
//!
//! Every node is generic over a blackboard type `C`. Decision trees read the
//! blackboard through conditions and write their verdict back through action
//! nodes, so the same tree instance can serve many independent decisions.

use crate::Status;

/// A node that can be ticked against a blackboard.
///
/// Trees are shared across threads, hence the `Send + Sync` bound. All
/// per-decision state belongs in the blackboard, never in the node.
pub trait Behavior<C>: Send + Sync {
    /// Evaluates this node against `ctx`.
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
