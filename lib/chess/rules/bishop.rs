use super::{slide, Rule, DIAGONALS};
use crate::chess::{Move, Piece, Position};

/// Slides diagonally.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bishop;

impl Rule for Bishop {
    fn moves(&self, piece: &Piece, pos: &Position) -> Vec<Move> {
        slide(piece, pos, &DIAGONALS)
    }
}
