use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// A square on the chess board.
///
/// Squares are indexed from 0 to 63 in row-major order, starting at `a8` in the top-left
/// corner of the board as seen by white and ending at `h1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square(#[cfg_attr(test, strategy(0u8..64))] u8);

impl Square {
    /// The number of squares on the board.
    pub const COUNT: usize = 64;

    /// Constructs [`Square`] from its index.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not address a square on the board.
    pub fn new(index: usize) -> Self {
        assert!(index < Self::COUNT, "square index `{}` is out of range", index);
        Square(index as u8)
    }

    /// Constructs [`Square`] from a file and a row, if both are on the board.
    pub fn from_coords(file: u8, row: u8) -> Option<Self> {
        (file < 8 && row < 8).then(|| Square(row * 8 + file))
    }

    /// An iterator over all squares in index order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..Self::COUNT).map(Square::new)
    }

    /// This square's index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// This square's file, where `0` is the `a`-file.
    pub fn file(&self) -> u8 {
        self.0 % 8
    }

    /// This square's row, counted from the top of the board.
    pub fn row(&self) -> u8 {
        self.0 / 8
    }

    /// This square's rank, from 1 to 8.
    pub fn rank(&self) -> u8 {
        8 - self.row()
    }

    /// The square a number of files and rows away, unless it falls off the board.
    ///
    /// Offsets that would wrap around an edge of the board yield `None`.
    pub fn shift(&self, files: i8, rows: i8) -> Option<Square> {
        let file = self.file() as i8 + files;
        let row = self.row() as i8 + rows;

        if (0..8).contains(&file) && (0..8).contains(&row) {
            Square::from_coords(file as u8, row as u8)
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [f @ b'a'..=b'h', r @ b'1'..=b'8'] => {
                Square::from_coords(f - b'a', 8 - (r - b'0')).ok_or(ParseSquareError)
            }
            _ => Err(ParseSquareError),
        }
    }
}
