use derive_more::Display;
use std::ops::Not;

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The row delta of a forward step for this color's pawns.
    ///
    /// Rows are counted from the top of the board, where black starts.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row from where this color's pawns may step twice.
    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row where this color's pieces start, which is the opponent's back rank.
    pub fn home_row(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The row where this color's pawns promote.
    pub fn promotion_row(&self) -> u8 {
        (!*self).home_row()
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
    }

    #[proptest]
    fn pawns_move_towards_the_promotion_row(c: Color) {
        let distance = c.promotion_row() as i8 - c.pawn_row() as i8;
        assert_eq!(distance, 6 * c.forward());
    }

    #[proptest]
    fn pawns_promote_on_the_opponents_home_row(c: Color) {
        assert_eq!(c.promotion_row(), (!c).home_row());
        assert_ne!(c.promotion_row(), c.home_row());
    }
}
