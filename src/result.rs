//! End-of-game result types.

use crate::game::Actor;

/// How the game ended, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The human emptied their hand first.
    Win,
    /// The opponent emptied its hand first.
    Lose,
}

impl Outcome {
    /// Returns the outcome for a game won by `winner`.
    #[must_use]
    pub const fn for_winner(winner: Actor) -> Self {
        match winner {
            Actor::Human => Self::Win,
            Actor::Opponent => Self::Lose,
        }
    }

    /// Returns the player who won.
    #[must_use]
    pub const fn winner(self) -> Actor {
        match self {
            Self::Win => Actor::Human,
            Self::Lose => Actor::Opponent,
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// The outcome of the game.
    pub outcome: Outcome,
    /// Number of completed turns, counting both players.
    pub turns: u32,
    /// Cards left in the loser's hand.
    pub loser_cards: usize,
}
