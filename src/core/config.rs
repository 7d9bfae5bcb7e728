//! Game configuration.
//!
//! Everything that tunes a run lives in one immutable `GameConfig` that is
//! handed to `Game::new` and never changes afterwards:
//! - Character roster and starting economy
//! - Monster template and per-kill scaling
//! - Input mode (card hand or event buttons)
//! - Reward, event and buff tables
//! - Log capacity and RNG seed
//!
//! Two presets ship with the crate. `GameConfig::default()` is the scaling
//! variant (monsters grow with every kill); `GameConfig::classic()` is the
//! basic variant with a fixed goblin.

use serde::{Deserialize, Serialize};

use super::action::ActionMode;
use crate::cards::{Card, CardEffect, RewardTable};
use crate::entities::{CharacterTemplate, MonsterTemplate, PlayerDefaults};
use crate::error::ConfigError;
use crate::game::buff::BuffAmounts;
use crate::rules::events::{EventKind, EventTable};

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use card_adventure::core::{ActionMode, GameConfig};
///
/// let config = GameConfig::default()
///     .with_action_mode(ActionMode::EventButtons)
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.roster[0].name, "战士");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Selectable characters, in screen order.
    pub roster: Vec<CharacterTemplate>,

    /// Monster stats and scaling.
    pub monster: MonsterTemplate,

    /// Gold, luck, strength, agility for a new player.
    pub player_defaults: PlayerDefaults,

    /// Which turn-consuming input the battle accepts.
    pub action_mode: ActionMode,

    /// Cards dealt at the start of every battle (card-hand mode).
    pub starting_hand: Vec<Card>,

    /// Scratch cards dealt at the start of every battle (card-hand mode).
    pub scratch_cards: usize,

    /// Luck-weighted reward roll.
    pub rewards: RewardTable,

    /// Event button odds (event mode).
    pub events: EventTable,

    /// Buff cards offered after each victory.
    pub buffs: Vec<Card>,

    /// Stat gains for each buff effect.
    pub buff_amounts: BuffAmounts,

    /// Raw bonus damage per thunder charge, mitigated by monster defense.
    pub thunder_bonus: u32,

    /// Number of log entries kept for display.
    pub log_capacity: usize,

    /// Seed for the built-in RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster: vec![
                CharacterTemplate::new("战士", 2400, 15, 8, "高生命值，中等攻击"),
                CharacterTemplate::new("法师", 1600, 20, 5, "高攻击，低防御"),
                CharacterTemplate::new("游侠", 2000, 12, 10, "平衡型角色"),
            ],
            monster: MonsterTemplate::default(),
            player_defaults: PlayerDefaults::default(),
            action_mode: ActionMode::CardHand,
            starting_hand: default_starting_hand(),
            scratch_cards: 3,
            rewards: RewardTable::default(),
            events: EventTable::default(),
            buffs: default_buffs(),
            buff_amounts: BuffAmounts::default(),
            thunder_bonus: 3,
            log_capacity: 10,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// The basic variant: lower-health roster and a fixed 50-health goblin.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            roster: vec![
                CharacterTemplate::new("战士", 120, 15, 8, "高生命值，中等攻击"),
                CharacterTemplate::new("法师", 80, 20, 5, "高攻击，低防御"),
                CharacterTemplate::new("游侠", 100, 12, 10, "平衡型角色"),
            ],
            monster: MonsterTemplate {
                health_per_kill: 0,
                defense: 3,
                ..MonsterTemplate::default()
            },
            ..Self::default()
        }
    }

    /// Select the battle input mode.
    #[must_use]
    pub fn with_action_mode(mut self, mode: ActionMode) -> Self {
        self.action_mode = mode;
        self
    }

    /// Replace the character roster.
    #[must_use]
    pub fn with_roster(mut self, roster: Vec<CharacterTemplate>) -> Self {
        self.roster = roster;
        self
    }

    /// Replace the monster template.
    #[must_use]
    pub fn with_monster(mut self, monster: MonsterTemplate) -> Self {
        self.monster = monster;
        self
    }

    /// Replace the starting hand.
    #[must_use]
    pub fn with_starting_hand(mut self, hand: Vec<Card>) -> Self {
        self.starting_hand = hand;
        self
    }

    /// Set the number of scratch cards per battle.
    #[must_use]
    pub fn with_scratch_cards(mut self, count: usize) -> Self {
        self.scratch_cards = count;
        self
    }

    /// Replace the starting economy.
    #[must_use]
    pub fn with_player_defaults(mut self, defaults: PlayerDefaults) -> Self {
        self.player_defaults = defaults;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check invariants the engine relies on.
    ///
    /// Entity constructors already refuse zero health, but a deserialized
    /// config bypasses them, so this re-checks everything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if let Some(bad) = self.roster.iter().find(|c| c.max_health == 0) {
            return Err(ConfigError::ZeroCharacterHealth(bad.name.clone()));
        }
        if self.monster.base_health == 0 {
            return Err(ConfigError::ZeroMonsterHealth(self.monster.name.clone()));
        }
        if self.buffs.is_empty() {
            return Err(ConfigError::NoBuffs);
        }
        // Negative luck clamps to 0; non-finite luck turns rolls into NaN
        if !self.player_defaults.luck.is_finite() {
            return Err(ConfigError::NonFiniteLuck(self.player_defaults.luck));
        }

        let RewardTable {
            skill_threshold,
            heavy_threshold,
            thunder_chance,
        } = self.rewards;
        if !(skill_threshold >= 0.0 && skill_threshold <= heavy_threshold) {
            return Err(ConfigError::RewardThresholds {
                skill: skill_threshold,
                heavy: heavy_threshold,
            });
        }
        check_probability("thunder_chance", thunder_chance)?;

        for kind in EventKind::ALL {
            check_probability(kind.name(), self.events.odds(kind).self_chance)?;
        }
        Ok(())
    }

    /// Look up a roster entry.
    #[must_use]
    pub fn character(&self, index: usize) -> Option<&CharacterTemplate> {
        self.roster.get(index)
    }
}

fn check_probability(what: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { what, value })
    }
}

fn default_starting_hand() -> Vec<Card> {
    vec![
        Card::basic_attack(),
        Card::basic_attack(),
        Card::heavy_attack(),
        Card::thunder(),
        Card::freeze(),
    ]
}

fn default_buffs() -> Vec<Card> {
    vec![
        Card::buff("力量提升", CardEffect::Strength),
        Card::buff("防御提升", CardEffect::Fortify),
        Card::buff("生命恢复", CardEffect::Heal),
    ]
}
