//! Card system: card values, the hand, and reward generation.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card value with a `CardKind` and optional `CardEffect`
//! - `Hand`: Ordered cards held by the player
//! - `RewardTable`: Luck-weighted card roll shared by draws and scratch cards
//! - `ScratchCard`: Face-down reward dealt at battle start

pub mod card;
pub mod hand;
pub mod reward;

pub use card::{apply_effect, Card, CardEffect, CardKind};
pub use hand::Hand;
pub use reward::{RewardTable, RewardTier, ScratchCard};
