//! Character templates and the player built from them.
//!
//! A `CharacterTemplate` is the immutable roster entry shown on the
//! character select screen. Picking one creates a `Player`, which owns all
//! mutable run state: health, combat stats, economy, and the thunder status.

use serde::{Deserialize, Serialize};

use super::status::StatusCounter;
use crate::rules::damage::{health_after, mitigated_damage};

/// Roster entry used to initialize a player.
///
/// ## Example
///
/// ```
/// use card_adventure::entities::CharacterTemplate;
///
/// let warrior = CharacterTemplate::new("战士", 2400, 15, 8, "高生命值，中等攻击");
/// assert_eq!(warrior.max_health, 2400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    pub name: String,
    pub max_health: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub description: String,
}

impl CharacterTemplate {
    /// Create a new template.
    ///
    /// # Panics
    ///
    /// Panics if `max_health` is zero.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        base_attack: u32,
        base_defense: u32,
        description: impl Into<String>,
    ) -> Self {
        assert!(max_health > 0, "Character max health must be positive");
        Self {
            name: name.into(),
            max_health,
            base_attack,
            base_defense,
            description: description.into(),
        }
    }
}

/// Starting economy and secondary stats for a fresh player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerDefaults {
    pub gold: u32,
    /// Reward-roll multiplier.
    pub luck: f64,
    pub strength: u32,
    pub agility: u32,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            gold: 50,
            luck: 1.0,
            strength: 1,
            agility: 1,
        }
    }
}

/// The player's run state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    character: String,
    health: u32,
    max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold: u32,
    pub luck: f64,
    pub strength: u32,
    pub agility: u32,
    thunder: StatusCounter,
}

impl Player {
    /// Build a full-health player from a roster entry.
    #[must_use]
    pub fn from_template(template: &CharacterTemplate, defaults: &PlayerDefaults) -> Self {
        Self {
            character: template.name.clone(),
            health: template.max_health,
            max_health: template.max_health,
            attack: template.base_attack,
            defense: template.base_defense,
            gold: defaults.gold,
            luck: defaults.luck.max(0.0),
            strength: defaults.strength,
            agility: defaults.agility,
            thunder: StatusCounter::inactive(),
        }
    }

    /// Name of the character this player was built from.
    #[must_use]
    pub fn character(&self) -> &str {
        &self.character
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Take a hit mitigated by defense. Returns the damage actually dealt.
    pub fn take_damage(&mut self, raw_attack: u32) -> u32 {
        let damage = mitigated_damage(raw_attack, self.defense);
        self.health = health_after(self.health, damage);
        damage
    }

    /// Take flat damage that ignores defense. Returns the amount applied.
    pub fn take_flat_damage(&mut self, amount: u32) -> u32 {
        self.health = health_after(self.health, amount);
        amount
    }

    /// Restore health, capped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    // === Thunder ===

    /// Arm the thunder status for `charges` card plays.
    pub fn arm_thunder(&mut self, charges: u32) {
        self.thunder.arm(charges);
    }

    /// Spend one thunder charge. Returns whether a charge was available.
    pub fn consume_thunder(&mut self) -> bool {
        self.thunder.consume()
    }

    #[must_use]
    pub fn thunder_effect(&self) -> bool {
        self.thunder.is_active()
    }

    #[must_use]
    pub fn thunder_duration(&self) -> u32 {
        self.thunder.remaining()
    }
}
