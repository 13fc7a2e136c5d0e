use crate::chess::Position;

mod standard;

pub use standard::*;

/// Trait for types that can evaluate a [`Position`].
#[cfg_attr(test, mockall::automock)]
pub trait Eval {
    /// Evaluates a [`Position`] reached with `depth` plies of search still to go.
    ///
    /// Positive values favor white, negative values favor black.
    fn eval(&self, pos: &Position, depth: u8) -> i32;
}

/// The weight of a checkmate found with `depth` plies still to go.
///
/// Mates found sooner, that is with more plies to spare, weigh more.
pub fn depth_bonus(depth: u8) -> i32 {
    match depth {
        0 => 1,
        d => 100 * d as i32,
    }
}
