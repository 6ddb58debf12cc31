//! Cards held by one player.

use alloc::vec::Vec;

use crate::card::{Card, CardId, CardKind, Color, can_follow};

/// A player's hand.
///
/// Cards keep the order in which they were drawn, so iteration (and every
/// decision built on it) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card with the given id, if held.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Returns the card with the given id, if held.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns whether the hand holds the card with the given id.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards that may be played on `top`.
    ///
    /// With an empty pile, every card is playable.
    #[must_use]
    pub fn playable(&self, top: Option<&Card>) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| can_follow(card, top))
            .copied()
            .collect()
    }

    /// Returns the number of cards of the given color.
    #[must_use]
    pub fn count_by_color(&self, color: Color) -> usize {
        self.cards.iter().filter(|card| card.color == color).count()
    }

    /// Returns the number of cards of the given kind.
    #[must_use]
    pub fn count_by_kind(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|card| card.kind() == kind).count()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
