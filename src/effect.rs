//! Side effects triggered when a card is played.

use crate::card::CardKind;

/// Effect applied after a card lands on the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing happens; the turn passes normally.
    None,
    /// The other player draws this many cards before the turn passes.
    ForceDraw(u8),
}

impl CardKind {
    /// Returns the effect of playing a card of this kind.
    #[must_use]
    pub const fn effect(self) -> Effect {
        match self {
            Self::Classic => Effect::None,
            Self::DrawTwo => Effect::ForceDraw(2),
        }
    }
}
