//! Card types and the legality rule.

use core::fmt;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
}

impl Color {
    /// All colors, in their canonical order.
    pub const ALL: [Self; 4] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];

    /// Index of the color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Card kind, without any per-card payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// A numbered card.
    Classic,
    /// Forces the other player to draw two cards.
    DrawTwo,
}

/// What is printed on a card.
///
/// New special cards are added here as new variants; [`can_follow`] only
/// needs to know whether two faces share a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// A numbered card (0 to 9).
    Classic(u8),
    /// A draw-two card.
    DrawTwo,
}

impl Face {
    /// Returns the kind of this face.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Self::Classic(_) => CardKind::Classic,
            Self::DrawTwo => CardKind::DrawTwo,
        }
    }
}

/// Identity of a physical card within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u16);

/// A playing card.
///
/// Two cards with the same color and face are still distinct cards; equality
/// compares identity as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Unique identity of the card.
    pub id: CardId,
    /// The color of the card.
    pub color: Color,
    /// The face of the card.
    pub face: Face,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: Classic numbers are not validated. Values above 9 are accepted
    /// and only match other cards with the same number.
    #[must_use]
    pub const fn new(id: CardId, color: Color, face: Face) -> Self {
        Self { id, color, face }
    }

    /// Returns the kind of the card.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.face.kind()
    }

    /// Returns the number of a Classic card.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        match self.face {
            Face::Classic(n) => Some(n),
            Face::DrawTwo => None,
        }
    }

    /// Returns whether this card may be played on `top`.
    ///
    /// Shorthand for [`can_follow`].
    #[must_use]
    pub fn can_follow(&self, top: Option<&Self>) -> bool {
        can_follow(self, top)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Classic(n) => write!(f, "{:?} {n}", self.color),
            Face::DrawTwo => write!(f, "{:?} +2", self.color),
        }
    }
}

/// Returns whether `candidate` may be played on top of `top`.
///
/// Any card may start an empty pile. Otherwise the candidate must share the
/// color, share a special kind, or share the number of a Classic card.
#[must_use]
pub fn can_follow(candidate: &Card, top: Option<&Card>) -> bool {
    let Some(top) = top else {
        return true;
    };

    if candidate.color == top.color {
        return true;
    }

    match (candidate.face, top.face) {
        (Face::Classic(a), Face::Classic(b)) => a == b,
        (a, b) => a.kind() == b.kind(),
    }
}

/// Number of cards in a freshly created deck.
pub const DECK_SIZE: usize = 108;
