//! Progression: the phase machine, kill counter, and buffs.
//!
//! - `controller`: `Game`, which owns the run and dispatches actions
//! - `buff`: buff amounts and their application

pub mod buff;
pub mod controller;

pub use buff::{apply_buff, BuffAmounts, BuffGain};
pub use controller::Game;
