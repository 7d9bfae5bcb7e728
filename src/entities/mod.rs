//! Combatants: character templates, the player, and monsters.
//!
//! ## Key Types
//!
//! - `CharacterTemplate`: Immutable roster entry
//! - `Player`: Run state created at character selection
//! - `MonsterTemplate`: Base monster stats and per-kill scaling
//! - `Monster`: The current encounter's opponent
//! - `StatusCounter`: Countdown status shared by thunder and freeze

pub mod character;
pub mod monster;
pub mod status;

pub use character::{CharacterTemplate, Player, PlayerDefaults};
pub use monster::{Monster, MonsterTemplate};
pub use status::StatusCounter;
