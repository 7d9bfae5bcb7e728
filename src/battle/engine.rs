//! One encounter: turn sequencing, action resolution, and status bookkeeping.
//!
//! A `Battle` owns the monster, the hand, and the scratch cards for a single
//! encounter. The player is owned by the game and lent in for each call.
//!
//! ## Turn flow
//!
//! 1. `PlayerTurn`: one turn-consuming action (card play or event button).
//! 2. `MonsterTurn`: the monster attacks, or spends a frozen turn.
//!
//! Every method validates before mutating, so a rejected action leaves the
//! battle untouched.

use serde::{Deserialize, Serialize};

use super::log::GameEvent;
use crate::cards::{apply_effect, Card, CardEffect, Hand, ScratchCard};
use crate::core::action::{ActionMode, DropTarget};
use crate::core::config::GameConfig;
use crate::core::rng::RandomSource;
use crate::core::state::{ScratchView, Turn};
use crate::entities::{Monster, Player};
use crate::error::ActionError;
use crate::rules::events::{EventKind, EventOutcome};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    PlayerDefeated,
    MonsterDefeated,
}

/// State of one encounter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Battle {
    monster: Monster,
    hand: Hand,
    scratch_cards: Vec<ScratchCard>,
    turn: Turn,
    round: u32,
    mode: ActionMode,
}

impl Battle {
    /// Start an encounter against a monster scaled for `kills`.
    ///
    /// In card-hand mode the starting hand and scratch cards are dealt; the
    /// scratch rewards are rolled now with the player's luck.
    pub fn start<R: RandomSource + ?Sized>(
        config: &GameConfig,
        player: &Player,
        kills: u32,
        rng: &mut R,
    ) -> Self {
        let (hand, scratch_cards) = match config.action_mode {
            ActionMode::CardHand => (
                config.starting_hand.iter().cloned().collect(),
                (0..config.scratch_cards)
                    .map(|_| ScratchCard::deal(&config.rewards, player.luck, rng))
                    .collect(),
            ),
            ActionMode::EventButtons => (Hand::new(), Vec::new()),
        };

        Self {
            monster: config.monster.spawn(kills),
            hand,
            scratch_cards,
            turn: Turn::Player,
            round: 1,
            mode: config.action_mode,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    /// Scratch cards as the player sees them.
    #[must_use]
    pub fn scratch_views(&self) -> Vec<ScratchView> {
        self.scratch_cards
            .iter()
            .map(|s| match s.revealed() {
                Some(card) => ScratchView::Revealed(card.clone()),
                None => ScratchView::Hidden,
            })
            .collect()
    }

    /// Number of scratch cards still face down.
    #[must_use]
    pub fn hidden_scratch_count(&self) -> usize {
        self.scratch_cards.iter().filter(|s| !s.is_scratched()).count()
    }

    // === Player actions ===

    /// Play the card at `index`, dropped on `target`.
    ///
    /// Order of resolution:
    /// 1. The card's effect resolves and its damage (if any) is mitigated by
    ///    the monster's defense.
    /// 2. If thunder is active, one charge is spent on bonus damage, also
    ///    mitigated by defense.
    ///
    /// Thunder is checked after the effect, so a thunder card spends its
    /// first charge on itself and leaves one for the next play.
    pub fn play_card(
        &mut self,
        index: usize,
        target: DropTarget,
        player: &mut Player,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        self.require_mode(ActionMode::CardHand)?;
        self.require_player_turn()?;
        if index >= self.hand.len() {
            return Err(ActionError::InvalidCard(index));
        }
        if target != DropTarget::Monster {
            return Err(ActionError::NoTarget);
        }
        let Some(card) = self.hand.take(index) else {
            return Err(ActionError::InvalidCard(index));
        };

        let raw = apply_effect(&card, player, &mut self.monster);
        let damage = if raw > 0 { self.monster.take_damage(raw) } else { 0 };
        events.push(GameEvent::CardPlayed {
            name: card.name.clone(),
            damage,
        });
        if card.effect == Some(CardEffect::Freeze) && self.monster.is_frozen() {
            events.push(GameEvent::MonsterFrozen {
                turns: self.monster.frozen_duration(),
            });
        }

        if player.consume_thunder() {
            let bonus = self.monster.take_damage(config.thunder_bonus);
            events.push(GameEvent::ThunderBonus {
                damage: bonus,
                charges_left: player.thunder_duration(),
            });
        }

        self.turn = Turn::Monster;
        Ok(())
    }

    /// Press an event button. Damage is flat in either direction.
    pub fn trigger_event<R: RandomSource + ?Sized>(
        &mut self,
        kind: EventKind,
        player: &mut Player,
        config: &GameConfig,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        self.require_mode(ActionMode::EventButtons)?;
        self.require_player_turn()?;

        let outcome = config.events.resolve(kind, rng);
        match outcome {
            EventOutcome::SelfHit(damage) => {
                player.take_flat_damage(damage);
            }
            EventOutcome::MonsterHit(damage) => {
                self.monster.take_flat_damage(damage);
            }
        }
        events.push(GameEvent::EventTriggered { kind, outcome });

        self.turn = Turn::Monster;
        Ok(())
    }

    /// Draw a reward card into the hand. Does not end the turn.
    ///
    /// There is no hand limit, so repeated draws grow the hand without bound.
    pub fn draw_card<R: RandomSource + ?Sized>(
        &mut self,
        player: &Player,
        config: &GameConfig,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        self.require_mode(ActionMode::CardHand)?;

        let card = config.rewards.roll(player.luck, rng);
        events.push(GameEvent::CardDrawn {
            name: card.name.clone(),
        });
        self.hand.push(card);
        Ok(())
    }

    /// Reveal scratch card `index` and add its reward to the hand.
    /// Does not end the turn.
    pub fn reveal_scratch(
        &mut self,
        index: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        self.require_mode(ActionMode::CardHand)?;
        let scratch = self
            .scratch_cards
            .get_mut(index)
            .ok_or(ActionError::InvalidScratch(index))?;
        let card: Card = scratch.scratch().ok_or(ActionError::AlreadyScratched(index))?;

        events.push(GameEvent::ScratchRevealed {
            index,
            name: card.name.clone(),
        });
        self.hand.push(card);
        Ok(())
    }

    // === Monster turn ===

    /// Resolve the monster's turn if it is pending. Returns whether it ran.
    ///
    /// A frozen monster spends the turn thawing instead of attacking; this
    /// is the only place the freeze counter is decremented.
    pub fn monster_turn(&mut self, player: &mut Player, events: &mut Vec<GameEvent>) -> bool {
        if self.turn != Turn::Monster {
            return false;
        }

        if self.monster.thaw_one_turn() {
            events.push(GameEvent::MonsterSkippedTurn {
                frozen_left: self.monster.frozen_duration(),
            });
        } else {
            let damage = self.monster.strike(player);
            events.push(GameEvent::MonsterAttacked { damage });
        }

        self.turn = Turn::Player;
        self.round += 1;
        true
    }

    /// Terminal check. Player defeat wins ties.
    #[must_use]
    pub fn outcome(&self, player: &Player) -> Option<BattleOutcome> {
        if !player.is_alive() {
            Some(BattleOutcome::PlayerDefeated)
        } else if !self.monster.is_alive() {
            Some(BattleOutcome::MonsterDefeated)
        } else {
            None
        }
    }

    fn require_mode(&self, required: ActionMode) -> Result<(), ActionError> {
        if self.mode == required {
            Ok(())
        } else {
            Err(ActionError::WrongMode {
                required,
                configured: self.mode,
            })
        }
    }

    fn require_player_turn(&self) -> Result<(), ActionError> {
        if self.turn == Turn::Player {
            Ok(())
        } else {
            Err(ActionError::NotPlayerTurn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRolls;
    use crate::entities::PlayerDefaults;

    fn setup(config: &GameConfig) -> (Battle, Player) {
        let player = Player::from_template(&config.roster[0], &PlayerDefaults::default());
        let mut rolls = ScriptedRolls::constant(0.5);
        let battle = Battle::start(config, &player, 0, &mut rolls);
        (battle, player)
    }

    #[test]
    fn test_start_deals_hand_and_scratch() {
        let config = GameConfig::default();
        let (battle, _) = setup(&config);
        assert_eq!(battle.hand().len(), 5);
        assert_eq!(battle.scratch_views(), vec![ScratchView::Hidden; 3]);
        assert_eq!(battle.hidden_scratch_count(), 3);
        assert_eq!(battle.turn(), Turn::Player);
        assert_eq!(battle.round(), 1);
        assert_eq!(battle.monster().max_health(), 50);
    }

    #[test]
    fn test_event_mode_starts_empty() {
        let config = GameConfig::default().with_action_mode(ActionMode::EventButtons);
        let (battle, _) = setup(&config);
        assert!(battle.hand().is_empty());
        assert!(battle.scratch_views().is_empty());
    }

    #[test]
    fn test_play_heavy_attack() {
        let config = GameConfig::default();
        let (mut battle, mut player) = setup(&config);
        let mut events = Vec::new();

        // index 2 is 重击
        battle
            .play_card(2, DropTarget::Monster, &mut player, &config, &mut events)
            .unwrap();

        assert_eq!(battle.monster().health(), 41);
        assert_eq!(battle.hand().len(), 4);
        assert_eq!(battle.turn(), Turn::Monster);
        assert_eq!(
            events,
            vec![GameEvent::CardPlayed {
                name: "重击".to_string(),
                damage: 9
            }]
        );
    }

    #[test]
    fn test_drop_elsewhere_is_noop() {
        let config = GameConfig::default();
        let (mut battle, mut player) = setup(&config);
        let mut events = Vec::new();

        let result = battle.play_card(0, DropTarget::Elsewhere, &mut player, &config, &mut events);
        assert_eq!(result, Err(ActionError::NoTarget));
        assert_eq!(battle.hand().len(), 5);
        assert_eq!(battle.turn(), Turn::Player);
        assert!(events.is_empty());
    }

    #[test]
    fn test_invalid_index_is_noop() {
        let config = GameConfig::default();
        let (mut battle, mut player) = setup(&config);
        let mut events = Vec::new();

        let result = battle.play_card(9, DropTarget::Monster, &mut player, &config, &mut events);
        assert_eq!(result, Err(ActionError::InvalidCard(9)));
        assert_eq!(battle.monster().health(), 50);
        assert_eq!(battle.turn(), Turn::Player);
    }

    #[test]
    fn test_cannot_act_on_monster_turn() {
        let config = GameConfig::default();
        let (mut battle, mut player) = setup(&config);
        let mut events = Vec::new();
        battle
            .play_card(0, DropTarget::Monster, &mut player, &config, &mut events)
            .unwrap();

        let result = battle.play_card(0, DropTarget::Monster, &mut player, &config, &mut events);
        assert_eq!(result, Err(ActionError::NotPlayerTurn));
        assert_eq!(battle.hand().len(), 4);
    }

    #[test]
    fn test_wrong_mode_rejected() {
        let config = GameConfig::default();
        let (mut battle, mut player) = setup(&config);
        let mut rolls = ScriptedRolls::constant(0.0);
        let mut events = Vec::new();

        let result =
            battle.trigger_event(EventKind::Risk, &mut player, &config, &mut rolls, &mut events);
        assert_eq!(
            result,
            Err(ActionError::WrongMode {
                required: ActionMode::EventButtons,
                configured: ActionMode::CardHand,
            })
        );
        assert_eq!(player.health(), 2400);
    }

    #[test]
    fn test_monster_turn_attacks() {
        let config = GameConfig::default();
        let (mut battle, mut player) = setup(&config);
        let mut events = Vec::new();

        assert!(!battle.monster_turn(&mut player, &mut events));

        battle
            .play_card(0, DropTarget::Monster, &mut player, &config, &mut events)
            .unwrap();
        events.clear();
        assert!(battle.monster_turn(&mut player, &mut events));
        assert_eq!(player.health(), 2399);
        assert_eq!(events, vec![GameEvent::MonsterAttacked { damage: 1 }]);
        assert_eq!(battle.turn(), Turn::Player);
        assert_eq!(battle.round(), 2);
    }

    #[test]
    fn test_freeze_skips_one_attack() {
        let config = GameConfig::default();
        let (mut battle, mut player) = setup(&config);
        let mut events = Vec::new();

        // index 4 is 冰冻
        battle
            .play_card(4, DropTarget::Monster, &mut player, &config, &mut events)
            .unwrap();
        assert!(battle.monster().is_frozen());
        assert_eq!(battle.monster().health(), 50);
        assert!(events.contains(&GameEvent::MonsterFrozen { turns: 1 }));

        events.clear();
        battle.monster_turn(&mut player, &mut events);
        assert_eq!(events, vec![GameEvent::MonsterSkippedTurn { frozen_left: 0 }]);
        assert_eq!(player.health(), 2400);
        assert!(!battle.monster().is_frozen());

        battle
            .play_card(0, DropTarget::Monster, &mut player, &config, &mut events)
            .unwrap();
        events.clear();
        battle.monster_turn(&mut player, &mut events);
        assert_eq!(events, vec![GameEvent::MonsterAttacked { damage: 1 }]);
        assert_eq!(player.health(), 2399);
    }

    #[test]
    fn test_thunder_card_boosts_itself() {
        let config = GameConfig::default()
            .with_starting_hand(vec![Card::thunder(), Card::thunder(), Card::basic_attack()]);
        let (mut battle, mut player) = setup(&config);
        let mut events = Vec::new();

        battle
            .play_card(0, DropTarget::Monster, &mut player, &config, &mut events)
            .unwrap();
        // 5 - 1 from the card, 3 - 1 from the bonus
        assert_eq!(battle.monster().health(), 44);
        assert_eq!(player.thunder_duration(), 1);
        assert_eq!(
            events,
            vec![
                GameEvent::CardPlayed {
                    name: "雷击".to_string(),
                    damage: 4
                },
                GameEvent::ThunderBonus {
                    damage: 2,
                    charges_left: 1
                },
            ]
        );
        battle.monster_turn(&mut player, &mut events);

        // Recasting re-arms to 2, then spends one on itself
        battle
            .play_card(0, DropTarget::Monster, &mut player, &config, &mut events)
            .unwrap();
        assert_eq!(player.thunder_duration(), 1);
        assert_eq!(battle.monster().health(), 38);
    }

    #[test]
    fn test_draw_card_is_free() {
        let config = GameConfig::default();
        let (mut battle, player) = setup(&config);
        let mut rolls = ScriptedRolls::new([0.2]);
        let mut events = Vec::new();

        battle.draw_card(&player, &config, &mut rolls, &mut events).unwrap();
        assert_eq!(battle.hand().len(), 6);
        assert_eq!(battle.hand().get(5), Some(&Card::heavy_attack()));
        assert_eq!(battle.turn(), Turn::Player);
    }

    #[test]
    fn test_reveal_scratch_once() {
        let config = GameConfig::default();
        let (mut battle, _) = setup(&config);
        let mut events = Vec::new();

        // Dealt with constant 0.5 rolls: basic attack
        battle.reveal_scratch(1, &mut events).unwrap();
        assert_eq!(battle.hand().len(), 6);
        assert_eq!(
            battle.scratch_views()[1],
            ScratchView::Revealed(Card::basic_attack())
        );
        assert_eq!(battle.hidden_scratch_count(), 2);

        assert_eq!(
            battle.reveal_scratch(1, &mut events),
            Err(ActionError::AlreadyScratched(1))
        );
        assert_eq!(
            battle.reveal_scratch(3, &mut events),
            Err(ActionError::InvalidScratch(3))
        );
        assert_eq!(battle.hand().len(), 6);
    }

    #[test]
    fn test_outcome_prefers_player_defeat() {
        let config = GameConfig::default().with_action_mode(ActionMode::EventButtons);
        let (mut battle, mut player) = setup(&config);
        assert_eq!(battle.outcome(&player), None);

        battle.monster.take_flat_damage(1000);
        assert_eq!(battle.outcome(&player), Some(BattleOutcome::MonsterDefeated));

        player.take_flat_damage(10_000);
        assert_eq!(battle.outcome(&player), Some(BattleOutcome::PlayerDefeated));
    }
}
