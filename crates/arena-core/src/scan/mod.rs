//! Line-of-sight threat scanning.
//!
//! The scanner looks along the four absolute axes from the controlled player
//! and reports, per axis, the nearest occupant and whether that occupant is
//! aimed back down the axis.
mod classification;
mod scanner;

pub use classification::{Contact, DirectionClassification, DirectionReading, ThreatStatus};
pub use scanner::ThreatScanner;
