//! Priority-ordered behavior trees for single-shot, per-turn decisions.
//!
//! A tree is built once and then ticked against a fresh blackboard for every
//! decision. Ticking never suspends: each node answers immediately, which
//! keeps evaluation a pure function of the blackboard contents.
//!
//! - **No Running state**: nodes succeed or fail within the tick
//! - **Ordered priorities**: [`Selector`] children are tried in declaration order
//! - **Zero dependencies**: plain Rust, no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`]
//!
//! Leaf nodes live with the blackboard they read and implement [`Behavior`]
//! directly.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use status::Status;
