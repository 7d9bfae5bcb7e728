//! Structured game events and the bounded log the UI displays.
//!
//! Every transition returns the `GameEvent`s it produced. The game also
//! appends them to a `BattleLog`, a ring buffer that keeps the most recent
//! entries for the status panel.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::buff::BuffGain;
use crate::rules::events::{EventKind, EventOutcome};

/// Something that happened during a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CharacterSelected {
        name: String,
    },
    BattleStarted {
        monster: String,
        max_health: u32,
        kills: u32,
    },
    CardPlayed {
        name: String,
        /// Damage after defense; 0 when the card deals none.
        damage: u32,
    },
    ThunderBonus {
        damage: u32,
        charges_left: u32,
    },
    MonsterFrozen {
        turns: u32,
    },
    EventTriggered {
        kind: EventKind,
        outcome: EventOutcome,
    },
    CardDrawn {
        name: String,
    },
    ScratchRevealed {
        index: usize,
        name: String,
    },
    MonsterAttacked {
        damage: u32,
    },
    MonsterSkippedTurn {
        frozen_left: u32,
    },
    MonsterDefeated {
        kills: u32,
    },
    PlayerDefeated,
    BuffApplied {
        name: String,
        gain: BuffGain,
    },
    Restarted,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharacterSelected { name } => write!(f, "Selected {name}"),
            Self::BattleStarted {
                monster,
                max_health,
                kills,
            } => write!(f, "{monster} appears with {max_health} HP (kills: {kills})"),
            Self::CardPlayed { name, damage } => write!(f, "{name} deals {damage} damage"),
            Self::ThunderBonus {
                damage,
                charges_left,
            } => write!(f, "Thunder adds {damage} damage ({charges_left} left)"),
            Self::MonsterFrozen { turns } => write!(f, "Monster frozen for {turns} turn(s)"),
            Self::EventTriggered { kind, outcome } => match outcome {
                EventOutcome::SelfHit(damage) => {
                    write!(f, "{} backfires for {damage} damage", kind.name())
                }
                EventOutcome::MonsterHit(damage) => {
                    write!(f, "{} hits the monster for {damage}", kind.name())
                }
            },
            Self::CardDrawn { name } => write!(f, "Drew {name}"),
            Self::ScratchRevealed { index, name } => write!(f, "Scratch card {index}: {name}"),
            Self::MonsterAttacked { damage } => write!(f, "Monster attacks for {damage}"),
            Self::MonsterSkippedTurn { frozen_left } => {
                write!(f, "Monster is frozen ({frozen_left} turn(s) left)")
            }
            Self::MonsterDefeated { kills } => write!(f, "Monster defeated (kills: {kills})"),
            Self::PlayerDefeated => write!(f, "You were defeated"),
            Self::BuffApplied { name, gain } => write!(f, "{name}: {gain}"),
            Self::Restarted => write!(f, "Restarted"),
        }
    }
}

/// A logged event with the battle round it happened in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Battle round, or 0 outside battle.
    pub round: u32,
    pub event: GameEvent,
}

/// Ring buffer of recent events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl BattleLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, dropping the oldest when full.
    pub fn record(&mut self, round: u32, event: GameEvent) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { round, event });
    }

    pub fn extend(&mut self, round: u32, events: &[GameEvent]) {
        for event in events {
            self.record(round, event.clone());
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Rendered lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.event.to_string()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
