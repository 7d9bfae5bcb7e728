//! Progression controller: the top-level phase machine.
//!
//! `Game` owns the player, the current battle, the kill counter, and the
//! RNG. Input arrives as discrete `Action`s; each one either applies fully or
//! is rejected with no state change.
//!
//! ## Phase transitions
//!
//! - `SelectCharacter -> Battle`: build the player, reset kills, spawn the
//!   first monster
//! - `Battle -> BuffSelection`: monster defeated, kills incremented
//! - `BuffSelection -> Battle`: buff applied, monster scaled by kills
//! - `Battle -> GameOver`: player defeated
//! - `GameOver -> SelectCharacter`: restart (kills reset on next selection)
//!
//! ## Ticking
//!
//! `tick` drains an `ActionQueue`, drops rejected actions, then resolves the
//! pending monster turn. One writer, one pass per tick.

use crate::battle::{Battle, BattleLog, BattleOutcome, GameEvent};
use crate::cards::{Card, Hand};
use crate::core::action::{Action, ActionMode, ActionQueue};
use crate::core::config::GameConfig;
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{GameSnapshot, Phase, ScratchView, Turn};
use crate::entities::{CharacterTemplate, Monster, Player};
use crate::error::{ActionError, ConfigError};
use crate::rules::events::EventKind;

use super::buff::apply_buff;

/// A complete run, from character select to game over.
///
/// ## Example
///
/// ```
/// use card_adventure::core::{Action, GameConfig, Phase};
/// use card_adventure::game::Game;
///
/// let mut game = Game::new(GameConfig::default()).unwrap();
/// game.apply(Action::SelectCharacter(0)).unwrap();
/// assert_eq!(game.phase(), Phase::Battle);
/// assert_eq!(game.monster().map(|m| m.max_health()), Some(50));
///
/// // Stale UI indices are rejected without changing anything
/// assert!(game.apply(Action::play(42)).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    character: Option<usize>,
    player: Option<Player>,
    battle: Option<Battle>,
    kills: u32,
    log: BattleLog,
}

impl Game<GameRng> {
    /// Create a game seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with an injected randomness source.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let log = BattleLog::new(config.log_capacity);
        Ok(Self {
            config,
            rng,
            phase: Phase::SelectCharacter,
            character: None,
            player: None,
            battle: None,
            kills: 0,
            log,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Defeated monsters this run.
    #[must_use]
    pub fn kills(&self) -> u32 {
        self.kills
    }

    #[must_use]
    pub fn character(&self) -> Option<&CharacterTemplate> {
        self.character.and_then(|i| self.config.character(i))
    }

    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    #[must_use]
    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    #[must_use]
    pub fn monster(&self) -> Option<&Monster> {
        self.battle.as_ref().map(Battle::monster)
    }

    #[must_use]
    pub fn hand(&self) -> Option<&Hand> {
        self.battle.as_ref().map(Battle::hand)
    }

    #[must_use]
    pub fn turn(&self) -> Option<Turn> {
        self.battle.as_ref().map(Battle::turn)
    }

    /// Current battle round, 0 outside battle.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.battle.as_ref().map_or(0, Battle::round)
    }

    #[must_use]
    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Mutable access to the RNG, e.g. to push more scripted rolls.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // === Actions ===

    /// Apply one action.
    ///
    /// Returns the events it produced. On error nothing changed.
    pub fn apply(&mut self, action: Action) -> Result<Vec<GameEvent>, ActionError> {
        let round = self.round();
        let mut events = Vec::new();

        match action {
            Action::SelectCharacter(index) => self.select_character(index, &mut events)?,
            Action::PlayCard { card_index, target } => {
                self.require_phase(Phase::Battle)?;
                let (battle, player) = battle_parts(&mut self.battle, &mut self.player, self.phase)?;
                battle.play_card(card_index, target, player, &self.config, &mut events)?;
                self.resolve_outcome(&mut events);
            }
            Action::TriggerEvent(kind) => {
                self.require_phase(Phase::Battle)?;
                let (battle, player) = battle_parts(&mut self.battle, &mut self.player, self.phase)?;
                battle.trigger_event(kind, player, &self.config, &mut self.rng, &mut events)?;
                self.resolve_outcome(&mut events);
            }
            Action::DrawCard => {
                self.require_phase(Phase::Battle)?;
                let (battle, player) = battle_parts(&mut self.battle, &mut self.player, self.phase)?;
                battle.draw_card(player, &self.config, &mut self.rng, &mut events)?;
            }
            Action::RevealScratch(index) => {
                self.require_phase(Phase::Battle)?;
                let (battle, _) = battle_parts(&mut self.battle, &mut self.player, self.phase)?;
                battle.reveal_scratch(index, &mut events)?;
            }
            Action::SelectBuff(index) => self.select_buff(index, &mut events)?,
            Action::Restart => self.restart(&mut events)?,
        }

        self.log.extend(round, &events);
        Ok(events)
    }

    /// Resolve the pending monster turn, if any.
    pub fn update(&mut self) -> Vec<GameEvent> {
        let round = self.round();
        let mut events = Vec::new();
        if self.phase != Phase::Battle {
            return events;
        }

        let ran = match (self.battle.as_mut(), self.player.as_mut()) {
            (Some(battle), Some(player)) => battle.monster_turn(player, &mut events),
            _ => false,
        };
        if ran {
            self.resolve_outcome(&mut events);
        }

        self.log.extend(round, &events);
        events
    }

    /// Process every queued action, then the monster turn.
    ///
    /// Rejected actions are dropped as no-ops.
    pub fn tick(&mut self, queue: &mut ActionQueue) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for action in queue.drain() {
            if let Ok(produced) = self.apply(action) {
                events.extend(produced);
            }
        }
        events.extend(self.update());
        events
    }

    /// Actions that would currently be accepted.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            Phase::SelectCharacter => (0..self.config.roster.len())
                .map(Action::SelectCharacter)
                .collect(),
            Phase::Battle => self.battle.as_ref().map_or_else(Vec::new, legal_battle_actions),
            Phase::BuffSelection => (0..self.config.buffs.len()).map(Action::SelectBuff).collect(),
            Phase::GameOver => vec![Action::Restart],
        }
    }

    /// Owned copy of everything the renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let battle = self.battle.as_ref();
        GameSnapshot {
            phase: self.phase,
            turn: self.turn(),
            round: self.round(),
            kills: self.kills,
            player: self.player.clone(),
            monster: self.monster().cloned(),
            hand: battle.map_or_else(Vec::new, |b| b.hand().as_slice().to_vec()),
            scratch_cards: battle.map_or_else(Vec::new, Battle::scratch_views),
            buffs: if self.phase == Phase::BuffSelection {
                self.config.buffs.clone()
            } else {
                Vec::new()
            },
            log: self.log.lines(),
        }
    }

    // === Transitions ===

    fn select_character(
        &mut self,
        index: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        self.require_phase(Phase::SelectCharacter)?;
        let template = self
            .config
            .character(index)
            .ok_or(ActionError::InvalidCharacter(index))?;

        let player = Player::from_template(template, &self.config.player_defaults);
        events.push(GameEvent::CharacterSelected {
            name: template.name.clone(),
        });

        self.kills = 0;
        self.character = Some(index);
        self.start_battle(player, events);
        Ok(())
    }

    fn select_buff(&mut self, index: usize, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        self.require_phase(Phase::BuffSelection)?;
        let card: &Card = self
            .config
            .buffs
            .get(index)
            .ok_or(ActionError::InvalidBuff(index))?;
        let mut player = self.player.take().ok_or(ActionError::WrongPhase {
            phase: self.phase,
        })?;

        let gain = apply_buff(card, &mut player, &self.config.buff_amounts);
        events.push(GameEvent::BuffApplied {
            name: card.name.clone(),
            gain,
        });

        self.start_battle(player, events);
        Ok(())
    }

    fn restart(&mut self, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        self.require_phase(Phase::GameOver)?;
        self.player = None;
        self.battle = None;
        self.character = None;
        self.phase = Phase::SelectCharacter;
        events.push(GameEvent::Restarted);
        Ok(())
    }

    fn start_battle(&mut self, player: Player, events: &mut Vec<GameEvent>) {
        let battle = Battle::start(&self.config, &player, self.kills, &mut self.rng);
        events.push(GameEvent::BattleStarted {
            monster: battle.monster().name().to_string(),
            max_health: battle.monster().max_health(),
            kills: self.kills,
        });
        self.player = Some(player);
        self.battle = Some(battle);
        self.phase = Phase::Battle;
    }

    /// Terminal check after any damage-dealing transition.
    fn resolve_outcome(&mut self, events: &mut Vec<GameEvent>) {
        let outcome = match (&self.battle, &self.player) {
            (Some(battle), Some(player)) => battle.outcome(player),
            _ => None,
        };

        match outcome {
            Some(BattleOutcome::PlayerDefeated) => {
                events.push(GameEvent::PlayerDefeated);
                self.battle = None;
                self.phase = Phase::GameOver;
            }
            Some(BattleOutcome::MonsterDefeated) => {
                self.kills += 1;
                events.push(GameEvent::MonsterDefeated { kills: self.kills });
                self.battle = None;
                self.phase = Phase::BuffSelection;
            }
            None => {}
        }
    }

    fn require_phase(&self, phase: Phase) -> Result<(), ActionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(ActionError::WrongPhase { phase: self.phase })
        }
    }
}

/// Borrow the battle and player together, leaving the other fields free.
fn battle_parts<'a>(
    battle: &'a mut Option<Battle>,
    player: &'a mut Option<Player>,
    phase: Phase,
) -> Result<(&'a mut Battle, &'a mut Player), ActionError> {
    match (battle.as_mut(), player.as_mut()) {
        (Some(battle), Some(player)) => Ok((battle, player)),
        _ => Err(ActionError::WrongPhase { phase }),
    }
}

fn legal_battle_actions(battle: &Battle) -> Vec<Action> {
    let player_turn = battle.turn() == Turn::Player;
    match battle.mode() {
        ActionMode::CardHand => {
            let mut actions = Vec::new();
            if player_turn {
                actions.extend((0..battle.hand().len()).map(Action::play));
            }
            actions.push(Action::DrawCard);
            actions.extend(
                battle
                    .scratch_views()
                    .iter()
                    .enumerate()
                    .filter(|(_, view)| **view == ScratchView::Hidden)
                    .map(|(i, _)| Action::RevealScratch(i)),
            );
            actions
        }
        ActionMode::EventButtons if player_turn => {
            EventKind::ALL.into_iter().map(Action::TriggerEvent).collect()
        }
        ActionMode::EventButtons => Vec::new(),
    }
}
