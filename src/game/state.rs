//! Game state types.

/// One of the two players at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    /// The player behind the host UI.
    Human,
    /// The automated player.
    Opponent,
}

impl Actor {
    /// Returns the other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Opponent,
            Self::Opponent => Self::Human,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Opponent => 1,
        }
    }
}

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to play or draw.
    HumanTurn,
    /// The opponent is "thinking" before it commits to an action.
    OpponentThinking,
    /// The opponent's action and its side effects are resolving.
    OpponentTurn,
    /// A hand ran out of cards. Terminal until restart.
    GameOver,
}

impl Phase {
    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn turn_owner(self) -> Option<Actor> {
        match self {
            Self::HumanTurn => Some(Actor::Human),
            Self::OpponentThinking | Self::OpponentTurn => Some(Actor::Opponent),
            Self::GameOver => None,
        }
    }
}

/// Coarse view of whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    /// The player whose turn it is, or who moved last once the game is over.
    pub turn_owner: Actor,
    /// Whether the turn owner may submit an action right now.
    pub active: bool,
    /// Whether the game has ended.
    pub ended: bool,
}
