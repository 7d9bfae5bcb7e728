//! Game phases, turn ownership, and read-only snapshots for rendering.
//!
//! ## Phase
//!
//! Top-level flow:
//! `SelectCharacter -> Battle -> BuffSelection -> Battle -> ... -> GameOver
//! -> SelectCharacter`.
//!
//! ## GameSnapshot
//!
//! Owned copy of everything the render adapter draws. Taking a snapshot never
//! mutates the game, and a snapshot can be sent to another thread.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::entities::{Monster, Player};

/// Top-level game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    SelectCharacter,
    Battle,
    BuffSelection,
    GameOver,
}

/// Whose turn it is inside a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Player,
    Monster,
}

/// Face of a scratch card as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScratchView {
    Hidden,
    Revealed(Card),
}

/// Everything the render adapter needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    /// Turn owner, only during battle.
    pub turn: Option<Turn>,
    /// Battle round (starts at 1), 0 outside battle.
    pub round: u32,
    pub kills: u32,
    pub player: Option<Player>,
    pub monster: Option<Monster>,
    pub hand: Vec<Card>,
    pub scratch_cards: Vec<ScratchView>,
    /// Buff choices, only during buff selection.
    pub buffs: Vec<Card>,
    /// Recent log lines, oldest first.
    pub log: Vec<String>,
}

impl GameSnapshot {
    /// Whether the player may act right now.
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.turn == Some(Turn::Player)
    }
}
