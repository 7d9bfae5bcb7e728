//! The player's hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Cards held by the player, in draw order.
///
/// SmallVec keeps the usual five-to-eight card hand off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card at the end (newest).
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take the card at `index` out of the hand, preserving the order of the rest.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_preserves_order() {
        let mut hand: Hand = [Card::basic_attack(), Card::heavy_attack(), Card::freeze()]
            .into_iter()
            .collect();

        let taken = hand.take(1);
        assert_eq!(taken, Some(Card::heavy_attack()));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.get(0), Some(&Card::basic_attack()));
        assert_eq!(hand.get(1), Some(&Card::freeze()));
    }

    #[test]
    fn test_take_out_of_range() {
        let mut hand = Hand::new();
        assert!(hand.take(0).is_none());

        hand.push(Card::thunder());
        assert!(hand.take(1).is_none());
        assert_eq!(hand.len(), 1);
        assert!(hand.take(0).is_some());
        assert!(hand.is_empty());
    }

    #[test]
    fn test_grows_past_inline_capacity() {
        let mut hand = Hand::new();
        for _ in 0..12 {
            hand.push(Card::basic_attack());
        }
        assert_eq!(hand.len(), 12);
        assert_eq!(hand.iter().filter(|c| c.attack == 5).count(), 12);
        hand.clear();
        assert!(hand.as_slice().is_empty());
    }
}
