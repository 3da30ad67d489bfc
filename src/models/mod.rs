//! Data models for the clinic scheduler.
//!
//! Field names match the JSON rows served over the wire.

mod doctor;
mod location;
mod schedule;

pub use doctor::*;
pub use location::*;
pub use schedule::*;
