//! Error types for rejected actions and invalid configuration.
//!
//! Rejected actions never change game state. The tick loop treats them as
//! no-ops; callers that care (tests, debug overlays) can inspect the reason.

use thiserror::Error;

use crate::core::action::ActionMode;
use crate::core::state::Phase;

/// Why an action was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("action not allowed during {phase:?}")]
    WrongPhase { phase: Phase },

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("action requires {required:?} mode, game is in {configured:?} mode")]
    WrongMode {
        required: ActionMode,
        configured: ActionMode,
    },

    #[error("no character at index {0}")]
    InvalidCharacter(usize),

    #[error("no card at hand index {0}")]
    InvalidCard(usize),

    #[error("no buff at index {0}")]
    InvalidBuff(usize),

    #[error("no scratch card at index {0}")]
    InvalidScratch(usize),

    #[error("scratch card {0} was already revealed")]
    AlreadyScratched(usize),

    #[error("card was not dropped on the monster")]
    NoTarget,
}

/// Invalid game configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("character roster is empty")]
    EmptyRoster,

    #[error("character '{0}' has zero max health")]
    ZeroCharacterHealth(String),

    #[error("monster '{0}' has zero base health")]
    ZeroMonsterHealth(String),

    #[error("buff list is empty")]
    NoBuffs,

    #[error("player luck must be finite, got {0}")]
    NonFiniteLuck(f64),

    #[error("probability {value} for {what} is outside [0, 1]")]
    Probability { what: &'static str, value: f64 },

    #[error("reward thresholds must satisfy 0 <= skill ({skill}) <= heavy ({heavy})")]
    RewardThresholds { skill: f64, heavy: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        assert_eq!(ActionError::InvalidCard(7).to_string(), "no card at hand index 7");
        assert_eq!(
            ActionError::WrongPhase { phase: Phase::GameOver }.to_string(),
            "action not allowed during GameOver"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::Probability { what: "risk", value: 1.5 };
        assert_eq!(err.to_string(), "probability 1.5 for risk is outside [0, 1]");
    }
}
