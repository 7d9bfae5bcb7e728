//! Combat rules independent of game flow.
//!
//! - `damage`: defense mitigation and health clamping
//! - `events`: event-button odds and flat-damage outcomes
//!
//! The battle engine calls into these but keeps all sequencing itself.

pub mod damage;
pub mod events;

pub use damage::{health_after, mitigated_damage};
pub use events::{EventKind, EventOdds, EventOutcome, EventTable};
