//! Error types for game operations.

use thiserror::Error;

use crate::card::CardId;

/// Reasons a human action is rejected.
///
/// A rejected action leaves the game untouched, so a host may simply ignore
/// the error and let the player try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// It is the opponent's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// A previous action is still resolving (for example a paced draw).
    #[error("an action is still resolving")]
    Busy,
    /// The card is not in the player's hand.
    #[error("card not in hand")]
    CardNotInHand,
    /// The card cannot be played on the current pile top.
    #[error("card cannot follow the pile top")]
    IllegalPlay,
}

/// Violations of the card ownership invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The containers do not hold the expected number of cards.
    #[error("expected {expected} cards across all containers, found {found}")]
    CountMismatch {
        /// Number of cards the game was created with.
        expected: usize,
        /// Number of cards found.
        found: usize,
    },
    /// The same card was found in more than one place.
    #[error("card {0:?} is held by more than one container")]
    DuplicateCard(CardId),
}
