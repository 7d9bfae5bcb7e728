//! # card-adventure
//!
//! Battle and progression core for a small turn-based card game.
//!
//! A player picks a character, fights an endless line of monsters with
//! cards (or risky event buttons), picks a buff after every win, and the run
//! ends on defeat. Every monster is tougher than the last.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: The core never renders or reads devices. A
//!    presentation layer sends `Action`s and reads `GameSnapshot`s.
//!
//! 2. **Reject, don't crash**: Invalid actions (stale indices, wrong phase)
//!    return an `ActionError` and leave state untouched.
//!
//! 3. **Configuration over constants**: All tuning lives in one immutable
//!    `GameConfig`, including the card-hand vs. event-button input mode.
//!
//! 4. **Injectable randomness**: Rewards and events draw from a
//!    `RandomSource`; tests script the rolls.
//!
//! ## Modules
//!
//! - `core`: Configuration, actions, phases, snapshots, RNG
//! - `entities`: Character templates, player, monsters, status counters
//! - `cards`: Cards, hand, luck-weighted rewards, scratch cards
//! - `rules`: Damage mitigation and event-button odds
//! - `battle`: Single-encounter turn machine and event log
//! - `game`: Phase machine, kill counter, buffs
//!
//! ## Example
//!
//! ```
//! use card_adventure::{Action, GameConfig, Game, Phase};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! game.apply(Action::SelectCharacter(0)).unwrap();
//!
//! // Heavy attack (index 2) on the 50 HP goblin
//! game.apply(Action::play(2)).unwrap();
//! game.update();
//!
//! assert_eq!(game.monster().unwrap().health(), 41);
//! assert_eq!(game.player().unwrap().health(), 2399);
//! assert_eq!(game.phase(), Phase::Battle);
//! ```

pub mod battle;
pub mod cards;
pub mod core;
pub mod entities;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionMode, ActionQueue, DropTarget,
    GameConfig, GameRng, RandomSource, ScriptedRolls,
    GameSnapshot, Phase, ScratchView, Turn,
};

pub use crate::entities::{CharacterTemplate, Monster, MonsterTemplate, Player, PlayerDefaults};

pub use crate::cards::{apply_effect, Card, CardEffect, CardKind, Hand, RewardTable, ScratchCard};

pub use crate::rules::{mitigated_damage, EventKind, EventOutcome, EventTable};

pub use crate::battle::{Battle, BattleLog, BattleOutcome, GameEvent};

pub use crate::game::{BuffAmounts, BuffGain, Game};

pub use crate::error::{ActionError, ConfigError};
