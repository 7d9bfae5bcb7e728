//! Event buttons: weighted coin flips between hurting yourself and the monster.
//!
//! Event damage is flat. It skips defense entirely, which keeps the event
//! layer independent of stat growth.

use serde::{Deserialize, Serialize};

use crate::core::rng::RandomSource;

/// The event buttons available in event mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Risk,
    Balance,
    Safe,
    AllIn,
    Scratch,
}

impl EventKind {
    /// All events, in button order.
    pub const ALL: [EventKind; 5] = [
        EventKind::Risk,
        EventKind::Balance,
        EventKind::Safe,
        EventKind::AllIn,
        EventKind::Scratch,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Balance => "balance",
            Self::Safe => "safe",
            Self::AllIn => "all_in",
            Self::Scratch => "scratch",
        }
    }
}

/// Odds and magnitudes for one event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventOdds {
    /// Probability the event backfires on the player.
    pub self_chance: f64,
    pub self_damage: u32,
    pub monster_damage: u32,
}

impl EventOdds {
    #[must_use]
    pub const fn new(self_chance: f64, self_damage: u32, monster_damage: u32) -> Self {
        Self {
            self_chance,
            self_damage,
            monster_damage,
        }
    }

    /// Flip the weighted coin. Always consumes exactly one draw.
    pub fn flip<R: RandomSource + ?Sized>(&self, rng: &mut R) -> EventOutcome {
        if rng.next_unit() < self.self_chance {
            EventOutcome::SelfHit(self.self_damage)
        } else {
            EventOutcome::MonsterHit(self.monster_damage)
        }
    }
}

/// Who an event hurt, and by how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    SelfHit(u32),
    MonsterHit(u32),
}

/// Odds for every event button.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventTable {
    pub risk: EventOdds,
    pub balance: EventOdds,
    pub safe: EventOdds,
    pub all_in: EventOdds,
    pub scratch: EventOdds,
}

impl Default for EventTable {
    fn default() -> Self {
        Self {
            risk: EventOdds::new(0.75, 30, 50),
            balance: EventOdds::new(0.50, 20, 20),
            safe: EventOdds::new(0.25, 10, 10),
            all_in: EventOdds::new(0.90, 50, 100),
            scratch: EventOdds::new(0.0, 0, 1),
        }
    }
}

impl EventTable {
    #[must_use]
    pub fn odds(&self, kind: EventKind) -> &EventOdds {
        match kind {
            EventKind::Risk => &self.risk,
            EventKind::Balance => &self.balance,
            EventKind::Safe => &self.safe,
            EventKind::AllIn => &self.all_in,
            EventKind::Scratch => &self.scratch,
        }
    }

    /// Resolve an event button press.
    pub fn resolve<R: RandomSource + ?Sized>(&self, kind: EventKind, rng: &mut R) -> EventOutcome {
        self.odds(kind).flip(rng)
    }
}
