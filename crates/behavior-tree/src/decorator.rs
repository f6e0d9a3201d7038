//! Decorator nodes wrapping a single child.

use crate::{Behavior, Status};

/// Negates its child's status.
///
/// Lets a tree reuse one condition for both "occupied" and "clear" guards.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}
