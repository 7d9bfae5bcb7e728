//! Card values and their effects on combat.
//!
//! Cards are immutable once created. Their behavior is selected by a
//! `CardKind` plus an optional typed `CardEffect`, and `apply_effect`
//! matches on both exhaustively.

use serde::{Deserialize, Serialize};

use crate::entities::{Monster, Player};

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Pure damage.
    Normal,
    /// Damage plus a status effect.
    Skill,
    /// Stat upgrade picked between battles. Deals no damage.
    Buff,
}

impl CardKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Skill => "skill",
            Self::Buff => "buff",
        }
    }
}

/// Named effect carried by skill and buff cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// Bonus damage on the next card plays.
    Thunder,
    /// Monster skips its next attack.
    Freeze,
    /// +attack.
    Strength,
    /// +defense.
    Fortify,
    /// Restore health.
    Heal,
}

impl CardEffect {
    /// Text shown on the card face.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Thunder => "后续2回合+3伤害",
            Self::Freeze => "怪物停止1回合",
            Self::Strength => "攻击力+2",
            Self::Fortify => "防御力+2",
            Self::Heal => "恢复20点生命",
        }
    }
}

/// A card in hand, on a scratch card, or offered as a buff.
///
/// ## Example
///
/// ```
/// use card_adventure::cards::{Card, CardKind};
///
/// let heavy = Card::heavy_attack();
/// assert_eq!(heavy.attack, 10);
/// assert_eq!(heavy.kind, CardKind::Normal);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    /// Raw damage before the monster's defense.
    pub attack: u32,
    pub defense: u32,
    pub cost: u32,
    pub kind: CardKind,
    pub effect: Option<CardEffect>,
    /// Turns (freeze) or charges (thunder) the effect lasts.
    pub effect_duration: u32,
}

impl Card {
    /// Create a normal damage card.
    #[must_use]
    pub fn normal(name: impl Into<String>, attack: u32, cost: u32) -> Self {
        Self {
            name: name.into(),
            attack,
            defense: 0,
            cost,
            kind: CardKind::Normal,
            effect: None,
            effect_duration: 0,
        }
    }

    /// Create a skill card with an effect.
    #[must_use]
    pub fn skill(
        name: impl Into<String>,
        attack: u32,
        cost: u32,
        effect: CardEffect,
        effect_duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            attack,
            defense: 0,
            cost,
            kind: CardKind::Skill,
            effect: Some(effect),
            effect_duration,
        }
    }

    /// Create a zero-cost buff card.
    #[must_use]
    pub fn buff(name: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            name: name.into(),
            attack: 0,
            defense: 0,
            cost: 0,
            kind: CardKind::Buff,
            effect: Some(effect),
            effect_duration: 0,
        }
    }

    /// 普通攻击: 5 damage, cost 1.
    #[must_use]
    pub fn basic_attack() -> Self {
        Self::normal("普通攻击", 5, 1)
    }

    /// 重击: 10 damage, cost 2.
    #[must_use]
    pub fn heavy_attack() -> Self {
        Self::normal("重击", 10, 2)
    }

    /// 雷击: 5 damage and two thunder charges, cost 3.
    #[must_use]
    pub fn thunder() -> Self {
        Self::skill("雷击", 5, 3, CardEffect::Thunder, 2)
    }

    /// 冰冻: no damage, freezes the monster for one turn, cost 3.
    #[must_use]
    pub fn freeze() -> Self {
        Self::skill("冰冻", 0, 3, CardEffect::Freeze, 1)
    }

    /// Effect text, if any.
    #[must_use]
    pub fn effect_text(&self) -> Option<&'static str> {
        self.effect.map(CardEffect::description)
    }
}

/// Resolve a card's effect and return the raw damage it deals.
///
/// - Normal cards return their attack.
/// - Thunder skills arm the player's thunder status and return their attack.
/// - Freeze skills freeze the monster and return their attack.
/// - Everything else returns 0; buffs go through buff selection instead.
pub fn apply_effect(card: &Card, player: &mut Player, monster: &mut Monster) -> u32 {
    match (card.kind, card.effect) {
        (CardKind::Normal, _) => card.attack,
        (CardKind::Skill, Some(CardEffect::Thunder)) => {
            player.arm_thunder(card.effect_duration);
            card.attack
        }
        (CardKind::Skill, Some(CardEffect::Freeze)) => {
            monster.freeze(card.effect_duration);
            card.attack
        }
        (CardKind::Skill, _) | (CardKind::Buff, _) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CharacterTemplate, PlayerDefaults};

    fn combatants() -> (Player, Monster) {
        let template = CharacterTemplate::new("法师", 1600, 20, 5, "");
        (
            Player::from_template(&template, &PlayerDefaults::default()),
            Monster::new("哥布林", 50, 8, 1),
        )
    }

    #[test]
    fn test_normal_returns_attack() {
        let (mut player, mut monster) = combatants();
        assert_eq!(apply_effect(&Card::heavy_attack(), &mut player, &mut monster), 10);
        assert!(!player.thunder_effect());
        assert!(!monster.is_frozen());
    }

    #[test]
    fn test_thunder_arms_player() {
        let (mut player, mut monster) = combatants();
        assert_eq!(apply_effect(&Card::thunder(), &mut player, &mut monster), 5);
        assert!(player.thunder_effect());
        assert_eq!(player.thunder_duration(), 2);
    }

    #[test]
    fn test_freeze_freezes_monster() {
        let (mut player, mut monster) = combatants();
        assert_eq!(apply_effect(&Card::freeze(), &mut player, &mut monster), 0);
        assert!(monster.is_frozen());
        assert_eq!(monster.frozen_duration(), 1);
    }

    #[test]
    fn test_buff_and_unknown_skill_deal_nothing() {
        let (mut player, mut monster) = combatants();
        let buff = Card::buff("力量提升", CardEffect::Strength);
        assert_eq!(apply_effect(&buff, &mut player, &mut monster), 0);

        let odd_skill = Card::skill("治疗术", 7, 1, CardEffect::Heal, 0);
        assert_eq!(apply_effect(&odd_skill, &mut player, &mut monster), 0);
        assert_eq!(player.attack, 20);
    }

    #[test]
    fn test_card_labels() {
        assert_eq!(Card::thunder().effect_text(), Some("后续2回合+3伤害"));
        assert_eq!(Card::basic_attack().effect_text(), None);
        assert_eq!(CardKind::Skill.label(), "skill");
    }
}
