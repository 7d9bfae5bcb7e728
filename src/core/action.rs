//! Discrete input actions and the queue that carries them into the engine.
//!
//! The presentation layer hit-tests pointer input itself and delivers one
//! of these already-resolved actions. The core never sees coordinates.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::rules::events::EventKind;

/// Which turn-consuming input a battle accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionMode {
    /// Drag cards from the hand onto the monster.
    #[default]
    CardHand,
    /// Press probability-weighted event buttons.
    EventButtons,
}

/// Where a dragged card was released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropTarget {
    /// On the monster: the card is played.
    Monster,
    /// Anywhere else: the drag is cancelled.
    Elsewhere,
}

/// A complete player action.
///
/// ## Example
///
/// ```
/// use card_adventure::core::{Action, DropTarget};
///
/// let play = Action::play(2);
/// assert_eq!(play, Action::PlayCard { card_index: 2, target: DropTarget::Monster });
/// assert!(play.consumes_turn());
/// assert!(!Action::DrawCard.consumes_turn());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Pick a character from the roster and start a run.
    SelectCharacter(usize),
    /// Release a hand card on a target.
    PlayCard { card_index: usize, target: DropTarget },
    /// Press an event button.
    TriggerEvent(EventKind),
    /// Press the draw button (free action).
    ///
    /// The hand has no size limit; every accepted draw adds one card.
    DrawCard,
    /// Reveal a scratch card (free action).
    RevealScratch(usize),
    /// Pick a buff after a victory.
    SelectBuff(usize),
    /// Return to character select after game over.
    Restart,
}

impl Action {
    /// Play the card at `card_index` on the monster.
    #[must_use]
    pub const fn play(card_index: usize) -> Self {
        Self::PlayCard {
            card_index,
            target: DropTarget::Monster,
        }
    }

    /// Whether this action ends the player's turn when it succeeds.
    #[must_use]
    pub const fn consumes_turn(&self) -> bool {
        matches!(self, Self::PlayCard { .. } | Self::TriggerEvent(_))
    }
}

/// FIFO of actions waiting for the next tick.
///
/// The input side pushes; `Game::tick` drains. Keeping input behind a queue
/// preserves one writer per tick even when input is produced elsewhere.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<Action>,
}

impl ActionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.pending.push_back(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every queued action, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.pending.drain(..)
    }
}

impl Extend<Action> for ActionQueue {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumes_turn() {
        assert!(Action::play(0).consumes_turn());
        assert!(Action::TriggerEvent(EventKind::Safe).consumes_turn());
        assert!(!Action::DrawCard.consumes_turn());
        assert!(!Action::RevealScratch(0).consumes_turn());
        assert!(!Action::SelectBuff(0).consumes_turn());
        assert!(!Action::Restart.consumes_turn());
    }

    #[test]
    fn test_queue_fifo() {
        let mut queue = ActionQueue::new();
        queue.push(Action::SelectCharacter(0));
        queue.extend([Action::DrawCard, Action::play(1)]);
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![Action::SelectCharacter(0), Action::DrawCard, Action::play(1)]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_action_serde() {
        let action = Action::PlayCard {
            card_index: 3,
            target: DropTarget::Elsewhere,
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
