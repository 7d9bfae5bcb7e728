//! Core types: configuration, actions, phases, snapshots, randomness.
//!
//! These are shared by every other module. Game-specific tuning goes in
//! `GameConfig` rather than in code.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Action, ActionMode, ActionQueue, DropTarget};
pub use config::GameConfig;
pub use rng::{GameRng, RandomSource, ScriptedRolls};
pub use state::{GameSnapshot, Phase, ScratchView, Turn};
