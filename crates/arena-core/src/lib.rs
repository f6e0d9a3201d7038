//! Arena data model and threat scanning.
//!
//! `arena-core` owns everything the decision engine knows about a single turn:
//! the validated [`ArenaSnapshot`], the heading rotation table, and the
//! [`ThreatScanner`] that turns a roster into a per-direction
//! [`DirectionClassification`]. Every API here is a pure function of its
//! inputs; nothing survives past the decision that built it.
pub mod action;
pub mod config;
pub mod error;
pub mod scan;
pub mod state;
#[cfg(feature = "serde")]
pub mod wire;

pub use action::Action;
pub use config::EngineConfig;
pub use error::SnapshotError;
pub use scan::{Contact, DirectionClassification, DirectionReading, ThreatScanner, ThreatStatus};
pub use state::{ArenaDimensions, ArenaSnapshot, Bearing, Heading, PlayerId, PlayerState, Position};
#[cfg(feature = "serde")]
pub use wire::{ArenaPayload, ArenaUpdate, Href, Links, PlayerPayload};
