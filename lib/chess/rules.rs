use super::{Move, Piece, Position, Role, Step};

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

pub use bishop::*;
pub use king::*;
pub use knight::*;
pub use pawn::*;
pub use queen::*;
pub use rook::*;

/// Trait for the movement rules of a kind of [`Piece`].
pub trait Rule {
    /// The pseudo-legal moves of `piece` in `pos`.
    ///
    /// Moves that would leave the piece's own king in check are included.
    fn moves(&self, piece: &Piece, pos: &Position) -> Vec<Move>;
}

/// The (file, row) offsets of a knight's jump.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// The (file, row) offsets of the squares surrounding a square.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Moves `piece` once by each offset, onto empty squares or the opponent's pieces.
pub(crate) fn leap(piece: &Piece, pos: &Position, offsets: &[(i8, i8)]) -> Vec<Move> {
    let mut moves = Vec::new();

    for s in offsets.iter().filter_map(|&(f, r)| piece.square().shift(f, r)) {
        match pos[s] {
            None => moves.push(Move::Quiet(Step::new(*piece, s))),
            Some(p) if p.color() != piece.color() => {
                moves.push(Move::Capture(Step::new(*piece, s), p))
            }
            Some(_) => {}
        }
    }

    moves
}

/// Moves `piece` along each direction until it hits the edge of the board or another piece.
pub(crate) fn slide(piece: &Piece, pos: &Position, directions: &[(i8, i8)]) -> Vec<Move> {
    let mut moves = Vec::new();

    for &(f, r) in directions {
        let mut square = piece.square();
        while let Some(s) = square.shift(f, r) {
            match pos[s] {
                None => moves.push(Move::Quiet(Step::new(*piece, s))),
                Some(p) => {
                    if p.color() != piece.color() {
                        moves.push(Move::Capture(Step::new(*piece, s), p));
                    }

                    break;
                }
            }

            square = s;
        }
    }

    moves
}

impl Piece {
    /// The pseudo-legal moves of this piece in `pos`, excluding castling.
    pub fn moves(&self, pos: &Position) -> Vec<Move> {
        match self.role() {
            Role::Pawn => Pawn.moves(self, pos),
            Role::Knight => Knight.moves(self, pos),
            Role::Bishop => Bishop.moves(self, pos),
            Role::Rook => Rook.moves(self, pos),
            Role::Queen => Queen.moves(self, pos),
            Role::King => King.moves(self, pos),
        }
    }
}
