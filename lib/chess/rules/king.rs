use super::{leap, Rule, KING_OFFSETS};
use crate::chess::{Move, Piece, Position};

/// Steps once in any direction.
///
/// Castling is handled separately, since it depends on more than the king itself.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct King;

impl Rule for King {
    fn moves(&self, piece: &Piece, pos: &Position) -> Vec<Move> {
        leap(piece, pos, &KING_OFFSETS)
    }
}
