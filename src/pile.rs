//! The face-up discard pile.

use alloc::vec::Vec;

use crate::card::Card;

/// Played cards. The top of the pile is the most recently played card.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Takes every card except the top one, leaving the top in place.
    pub fn recycle(&mut self) -> Vec<Card> {
        let Some(top) = self.cards.pop() else {
            return Vec::new();
        };
        let recycled = core::mem::take(&mut self.cards);
        self.cards.push(top);
        recycled
    }

    /// Returns the played cards, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether nothing has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card from the pile.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
