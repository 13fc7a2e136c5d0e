use super::Position;
use derive_more::Display;

/// The state of the game from the perspective of the side to move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameStatus {
    #[display(fmt = "ongoing")]
    Ongoing,
    #[display(fmt = "check")]
    Check,
    #[display(fmt = "checkmate")]
    Checkmate,
    #[display(fmt = "stalemate")]
    Stalemate,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// The outcome of attempting to play a move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum MoveStatus {
    #[display(fmt = "done")]
    Done,
    #[display(fmt = "illegal move")]
    Illegal,
    #[display(fmt = "move leaves own king in check")]
    LeadsToOwnCheck,
}

impl MoveStatus {
    /// Whether the move was played.
    pub fn is_done(&self) -> bool {
        *self == MoveStatus::Done
    }
}

/// The [`Position`] that results from attempting to play a move, along with its [`MoveStatus`].
///
/// Unless the move was played, the position is the one where it was attempted.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Transition {
    position: Position,
    status: MoveStatus,
}

impl Transition {
    /// Constructs [`Transition`] from its parts.
    pub fn new(position: Position, status: MoveStatus) -> Self {
        Transition { position, status }
    }

    /// The resulting [`Position`].
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Consumes this transition, returning the resulting [`Position`].
    pub fn into_position(self) -> Position {
        self.position
    }

    /// The [`MoveStatus`].
    pub fn status(&self) -> MoveStatus {
        self.status
    }
}
