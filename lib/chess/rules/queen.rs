use super::{slide, Rule, KING_OFFSETS};
use crate::chess::{Move, Piece, Position};

/// Slides in any direction.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Queen;

impl Rule for Queen {
    fn moves(&self, piece: &Piece, pos: &Position) -> Vec<Move> {
        slide(piece, pos, &KING_OFFSETS)
    }
}
