use super::{slide, Rule, ORTHOGONALS};
use crate::chess::{Move, Piece, Position};

/// Slides along files and ranks.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rook;

impl Rule for Rook {
    fn moves(&self, piece: &Piece, pos: &Position) -> Vec<Move> {
        slide(piece, pos, &ORTHOGONALS)
    }
}
