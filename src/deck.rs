//! The face-down draw pool.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardId, Color, DECK_SIZE, Face};

/// Number of DrawTwo cards per color in the canonical distribution.
const DRAW_TWO_PER_COLOR: usize = 2;

/// The draw pool. The top of the deck is the end of the vector.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a full, shuffled deck.
    #[must_use]
    pub fn created<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.create(rng);
        deck
    }

    /// Creates a deck from the given cards, where the last card is the top.
    ///
    /// No shuffling is performed.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Discards the current pool and builds a fresh shuffled deck of
    /// [`DECK_SIZE`] cards with ids `0..DECK_SIZE`.
    ///
    /// Each color gets one 0, two of each 1 to 9 and two DrawTwo cards. The
    /// slots left over after that are filled with random Classic or DrawTwo
    /// cards.
    pub fn create<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        let mut faces = Vec::with_capacity(DECK_SIZE);
        for color in Color::ALL {
            faces.push((color, Face::Classic(0)));
            for number in 1..=9 {
                faces.push((color, Face::Classic(number)));
                faces.push((color, Face::Classic(number)));
            }
            for _ in 0..DRAW_TWO_PER_COLOR {
                faces.push((color, Face::DrawTwo));
            }
        }

        while faces.len() < DECK_SIZE {
            let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
            let face = match rng.random_range(0..=10u8) {
                10 => Face::DrawTwo,
                n => Face::Classic(n),
            };
            faces.push((color, face));
        }

        for (index, (color, face)) in faces.into_iter().enumerate() {
            self.cards.push(Card::new(CardId(index as u16), color, face));
        }

        self.shuffle(rng);
    }

    /// Shuffles the deck in place with a uniform Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Puts recycled cards back into the pool and reshuffles.
    pub fn refill_from<R: Rng + ?Sized>(&mut self, cards: Vec<Card>, rng: &mut R) {
        self.cards.extend(cards);
        self.shuffle(rng);
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card from the deck.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
