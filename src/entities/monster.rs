//! Monsters and the template they are scaled from.

use serde::{Deserialize, Serialize};

use super::character::Player;
use super::status::StatusCounter;
use crate::rules::damage::{health_after, mitigated_damage};

/// Base monster stats plus per-kill health scaling.
///
/// The Nth monster of a run (after N kills) has
/// `base_health + health_per_kill * N` max health.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub base_health: u32,
    pub health_per_kill: u32,
    pub attack: u32,
    pub defense: u32,
}

impl MonsterTemplate {
    /// Scaled max health after `kills` defeated monsters.
    #[must_use]
    pub fn health_for(&self, kills: u32) -> u32 {
        self.base_health
            .saturating_add(self.health_per_kill.saturating_mul(kills))
    }

    /// Spawn a fresh monster scaled for `kills`.
    #[must_use]
    pub fn spawn(&self, kills: u32) -> Monster {
        Monster::new(self.name.clone(), self.health_for(kills), self.attack, self.defense)
    }
}

impl Default for MonsterTemplate {
    fn default() -> Self {
        Self {
            name: "哥布林".to_string(),
            base_health: 50,
            health_per_kill: 50,
            attack: 8,
            defense: 1,
        }
    }
}

/// A monster in the current encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    name: String,
    health: u32,
    max_health: u32,
    pub attack: u32,
    pub defense: u32,
    frozen: StatusCounter,
}

impl Monster {
    /// Create a full-health monster.
    ///
    /// # Panics
    ///
    /// Panics if `max_health` is zero.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: u32, attack: u32, defense: u32) -> Self {
        assert!(max_health > 0, "Monster max health must be positive");
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            attack,
            defense,
            frozen: StatusCounter::inactive(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
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

    /// Attack the player with the standard formula.
    pub fn strike(&self, player: &mut Player) -> u32 {
        player.take_damage(self.attack)
    }

    // === Freeze ===

    /// Freeze for `turns` monster turns.
    pub fn freeze(&mut self, turns: u32) {
        self.frozen.arm(turns);
    }

    /// Spend one frozen turn. Returns whether the monster was frozen.
    ///
    /// This is the only place the freeze counter goes down.
    pub fn thaw_one_turn(&mut self) -> bool {
        self.frozen.consume()
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen.is_active()
    }

    #[must_use]
    pub fn frozen_duration(&self) -> u32 {
        self.frozen.remaining()
    }
}
