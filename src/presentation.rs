//! Read-only table snapshots for renderers.
//!
//! Nothing here has any rule meaning. The engine keeps a record per card of
//! where it sits and whether it shows its face, and updates it whenever a
//! card moves.

use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::game::Actor;

/// Container a card currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The draw pool.
    Deck,
    /// The discard pile.
    Pile,
    /// A player's hand.
    Hand(Actor),
}

/// Presentation state attached to one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPresentation {
    /// Whether the card shows its face.
    pub face_up: bool,
    /// Container the card should be drawn in.
    pub zone: Zone,
    /// Position within that container (0 = bottom of a stack, leftmost in a hand).
    pub slot: usize,
}

impl CardPresentation {
    /// A face-down card at the given position.
    #[must_use]
    pub const fn face_down(zone: Zone, slot: usize) -> Self {
        Self {
            face_up: false,
            zone,
            slot,
        }
    }
}

/// A card together with its presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCard {
    /// The card.
    pub card: Card,
    /// How it should be drawn.
    pub presentation: CardPresentation,
}

/// Everything a renderer needs to draw the table.
#[derive(Debug, Clone, Default)]
pub struct TableSnapshot {
    /// Draw pool, bottom first.
    pub deck: Vec<PlacedCard>,
    /// Discard pile, oldest first.
    pub pile: Vec<PlacedCard>,
    /// The human's hand.
    pub human: Vec<PlacedCard>,
    /// The opponent's hand.
    pub opponent: Vec<PlacedCard>,
}

impl TableSnapshot {
    /// Iterates over every card on the table.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedCard> {
        self.deck
            .iter()
            .chain(&self.pile)
            .chain(&self.human)
            .chain(&self.opponent)
    }
}

/// Per-card presentation records, indexed by [`CardId`].
#[derive(Debug, Clone, Default)]
pub(crate) struct PresentationTable {
    records: Vec<CardPresentation>,
}

impl PresentationTable {
    /// Resets every record to a face-down deck card.
    pub(crate) fn reset(&mut self, deck: &[Card]) {
        self.records.clear();
        self.records
            .resize(deck.len(), CardPresentation::face_down(Zone::Deck, 0));
        for (slot, card) in deck.iter().enumerate() {
            self.place(card.id, Zone::Deck, slot);
        }
    }

    pub(crate) fn get(&self, id: CardId) -> Option<CardPresentation> {
        self.records.get(usize::from(id.0)).copied()
    }

    fn record_mut(&mut self, id: CardId) -> Option<&mut CardPresentation> {
        self.records.get_mut(usize::from(id.0))
    }

    pub(crate) fn place(&mut self, id: CardId, zone: Zone, slot: usize) {
        let index = usize::from(id.0);
        if index >= self.records.len() {
            self.records
                .resize(index + 1, CardPresentation::face_down(Zone::Deck, 0));
        }
        self.records[index].zone = zone;
        self.records[index].slot = slot;
    }

    pub(crate) fn set_face_up(&mut self, id: CardId, face_up: bool) -> bool {
        self.record_mut(id).is_some_and(|record| {
            record.face_up = face_up;
            true
        })
    }

    /// Re-indexes the slots of every card in `cards`.
    pub(crate) fn relayout(&mut self, zone: Zone, cards: &[Card]) {
        for (slot, card) in cards.iter().enumerate() {
            self.place(card.id, zone, slot);
        }
    }

    /// Pairs each card with its record. Cards never placed through the
    /// table are reported face-down at their current position.
    pub(crate) fn placed(&self, zone: Zone, cards: &[Card]) -> Vec<PlacedCard> {
        cards
            .iter()
            .enumerate()
            .map(|(slot, card)| PlacedCard {
                card: *card,
                presentation: self
                    .get(card.id)
                    .filter(|record| record.zone == zone)
                    .unwrap_or(CardPresentation::face_down(zone, slot)),
            })
            .collect()
    }
}
