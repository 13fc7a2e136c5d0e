use crate::chess::{Move, Position};

mod minimax;

pub use minimax::*;

/// Trait for types that implement adversarial search algorithms.
pub trait Search {
    /// Searches for the strongest [`Move`] looking `depth` plies ahead.
    ///
    /// Returns [`Move::Null`] if the side to move has no legal moves.
    fn search(&self, pos: &Position, depth: u8) -> Move;
}
