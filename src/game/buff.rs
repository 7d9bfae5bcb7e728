//! Buffs picked between battles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardEffect, CardKind};
use crate::entities::Player;

/// How much each buff effect grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffAmounts {
    pub attack: u32,
    pub defense: u32,
    pub heal: u32,
}

impl Default for BuffAmounts {
    fn default() -> Self {
        Self {
            attack: 2,
            defense: 2,
            heal: 20,
        }
    }
}

/// What a buff actually changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuffGain {
    Attack(u32),
    Defense(u32),
    /// Health restored after the max-health cap.
    Healed(u32),
    /// The card carried no buff effect.
    Nothing,
}

impl fmt::Display for BuffGain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack(n) => write!(f, "attack +{n}"),
            Self::Defense(n) => write!(f, "defense +{n}"),
            Self::Healed(n) => write!(f, "healed {n}"),
            Self::Nothing => write!(f, "no effect"),
        }
    }
}

/// Apply a buff card to the player.
pub fn apply_buff(card: &Card, player: &mut Player, amounts: &BuffAmounts) -> BuffGain {
    if card.kind != CardKind::Buff {
        return BuffGain::Nothing;
    }
    match card.effect {
        Some(CardEffect::Strength) => {
            player.attack = player.attack.saturating_add(amounts.attack);
            BuffGain::Attack(amounts.attack)
        }
        Some(CardEffect::Fortify) => {
            player.defense = player.defense.saturating_add(amounts.defense);
            BuffGain::Defense(amounts.defense)
        }
        Some(CardEffect::Heal) => BuffGain::Healed(player.heal(amounts.heal)),
        Some(CardEffect::Thunder | CardEffect::Freeze) | None => BuffGain::Nothing,
    }
}
