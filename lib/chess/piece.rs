use super::{Color, Role, Square};
use std::fmt::{self, Write};

/// A chess piece standing on a [`Square`].
///
/// Pieces are immutable values, moving a piece produces a new one at the destination.
/// Two pieces are the same if they agree on color, role, square and whether they have
/// ever moved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    color: Color,
    role: Role,
    square: Square,
    moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    pub fn new(color: Color, role: Role, square: Square) -> Self {
        Piece {
            color,
            role,
            square,
            moved: false,
        }
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Square`].
    pub fn square(&self) -> Square {
        self.square
    }

    /// Whether this piece has moved since the game began.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// The piece that results from moving this one to `whither`.
    pub fn moved_to(&self, whither: Square) -> Self {
        Piece {
            square: whither,
            moved: true,
            ..*self
        }
    }

    /// The piece of another [`Role`] that results from promoting this one.
    pub fn promoted_to(&self, role: Role) -> Self {
        Piece {
            role,
            moved: true,
            ..*self
        }
    }
}

/// Prints the piece's letter, uppercase for white and lowercase for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.role {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match self.color {
            Color::White => f.write_char(c.to_ascii_uppercase()),
            Color::Black => f.write_char(c),
        }
    }
}
