//! Luck-weighted card rewards.
//!
//! One table drives both the draw button and scratch-off cards, so the two
//! can never drift apart in balance.
//!
//! The roll is `r = uniform[0, 1) * luck`:
//!
//! | r                         | reward                           |
//! |---------------------------|----------------------------------|
//! | `r < skill`               | 雷击 or 冰冻 (coin flip)          |
//! | `skill <= r < heavy`      | 重击                              |
//! | `r >= heavy`              | 普通攻击                          |
//!
//! Both bounds are exclusive on the upper side. With luck 0 the roll is
//! always 0 and always lands in the skill band.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::rng::RandomSource;

/// Band boundaries for the reward roll.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Upper bound (exclusive) of the skill band.
    pub skill_threshold: f64,
    /// Upper bound (exclusive) of the heavy-attack band.
    pub heavy_threshold: f64,
    /// Chance that a skill reward is thunder rather than freeze.
    pub thunder_chance: f64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            skill_threshold: 0.10,
            heavy_threshold: 0.30,
            thunder_chance: 0.5,
        }
    }
}

/// Which band a roll landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardTier {
    Skill,
    Heavy,
    Basic,
}

impl RewardTable {
    /// Classify a luck-scaled roll.
    #[must_use]
    pub fn tier(&self, roll: f64) -> RewardTier {
        if roll < self.skill_threshold {
            RewardTier::Skill
        } else if roll < self.heavy_threshold {
            RewardTier::Heavy
        } else {
            RewardTier::Basic
        }
    }

    /// Roll a card for a player with the given luck.
    ///
    /// Skill rewards consume a second draw for the thunder/freeze flip.
    ///
    /// ```
    /// use card_adventure::cards::{Card, RewardTable};
    /// use card_adventure::core::ScriptedRolls;
    ///
    /// let table = RewardTable::default();
    /// let mut rolls = ScriptedRolls::new([0.2]);
    /// assert_eq!(table.roll(1.0, &mut rolls), Card::heavy_attack());
    /// ```
    pub fn roll<R: RandomSource + ?Sized>(&self, luck: f64, rng: &mut R) -> Card {
        let roll = rng.next_unit() * luck.max(0.0);
        match self.tier(roll) {
            RewardTier::Skill => {
                if rng.next_unit() < self.thunder_chance {
                    Card::thunder()
                } else {
                    Card::freeze()
                }
            }
            RewardTier::Heavy => Card::heavy_attack(),
            RewardTier::Basic => Card::basic_attack(),
        }
    }
}

/// A face-down reward dealt at the start of a battle.
///
/// The reward is rolled when the card is dealt; revealing it only flips it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScratchCard {
    reward: Card,
    scratched: bool,
}

impl ScratchCard {
    /// Deal a scratch card, rolling its reward now.
    pub fn deal<R: RandomSource + ?Sized>(table: &RewardTable, luck: f64, rng: &mut R) -> Self {
        Self {
            reward: table.roll(luck, rng),
            scratched: false,
        }
    }

    /// Reveal the reward. Returns `None` if already scratched.
    pub fn scratch(&mut self) -> Option<Card> {
        if self.scratched {
            return None;
        }
        self.scratched = true;
        Some(self.reward.clone())
    }

    #[must_use]
    pub fn is_scratched(&self) -> bool {
        self.scratched
    }

    /// The reward, visible only once scratched.
    #[must_use]
    pub fn revealed(&self) -> Option<&Card> {
        self.scratched.then_some(&self.reward)
    }
}
