//! Battle engine: a single encounter and the events it produces.
//!
//! - `engine`: `Battle` turn machine and `BattleOutcome`
//! - `log`: `GameEvent` and the bounded `BattleLog`

pub mod engine;
pub mod log;

pub use engine::{Battle, BattleOutcome};
pub use log::{BattleLog, GameEvent, LogEntry};
