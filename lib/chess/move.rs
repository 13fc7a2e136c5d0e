use super::{ParseSquareError, Piece, Position, Promote, Role, Setup, Square};
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A [`Piece`] and where it is headed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Step {
    piece: Piece,
    whither: Square,
}

impl Step {
    /// Constructs [`Step`] from the moving piece and its destination.
    pub fn new(piece: Piece, whither: Square) -> Self {
        Step { piece, whither }
    }

    /// The moving [`Piece`].
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.piece.square()
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.whither
    }
}

/// The rook that accompanies the king when castling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Castle {
    rook: Piece,
    whither: Square,
}

impl Castle {
    /// Constructs [`Castle`] from the castling rook and its destination.
    pub fn new(rook: Piece, whither: Square) -> Self {
        Castle { rook, whither }
    }

    /// The castling rook.
    pub fn rook(&self) -> Piece {
        self.rook
    }

    /// The rook's source [`Square`].
    pub fn whence(&self) -> Square {
        self.rook.square()
    }

    /// The rook's destination [`Square`].
    pub fn whither(&self) -> Square {
        self.whither
    }
}

/// A chess move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Move {
    /// A move onto an empty square.
    Quiet(Step),
    /// A move that takes the opponent's piece on the destination square.
    Capture(Step, Piece),
    /// A pawn advancing two squares from its starting row.
    DoublePawnStep(Step),
    /// A pawn taking the pawn that just stepped twice past it.
    EnPassant(Step, Piece),
    /// A pawn reaching the back rank, possibly by capturing.
    Promotion(Step, Option<Piece>),
    /// The king castling towards the `h`-file.
    CastleKingside(Step, Castle),
    /// The king castling towards the `a`-file.
    CastleQueenside(Step, Castle),
    /// The absence of a move.
    Null,
}

impl Move {
    /// The [`Step`] of the moving piece, unless this is the null move.
    pub fn step(&self) -> Option<Step> {
        use Move::*;
        match *self {
            Quiet(s) | Capture(s, _) | DoublePawnStep(s) | EnPassant(s, _) | Promotion(s, _) => {
                Some(s)
            }
            CastleKingside(s, _) | CastleQueenside(s, _) => Some(s),
            Null => None,
        }
    }

    /// The moving [`Piece`], unless this is the null move.
    pub fn piece(&self) -> Option<Piece> {
        self.step().map(|s| s.piece())
    }

    /// The source [`Square`], unless this is the null move.
    pub fn whence(&self) -> Option<Square> {
        self.step().map(|s| s.whence())
    }

    /// The destination [`Square`], unless this is the null move.
    pub fn whither(&self) -> Option<Square> {
        self.step().map(|s| s.whither())
    }

    /// The [`Piece`] taken by this move, if any.
    pub fn captured(&self) -> Option<Piece> {
        match *self {
            Move::Capture(_, p) | Move::EnPassant(_, p) => Some(p),
            Move::Promotion(_, p) => p,
            _ => None,
        }
    }

    /// The rook that accompanies the king, if this is a castling move.
    pub fn castle(&self) -> Option<Castle> {
        match *self {
            Move::CastleKingside(_, c) | Move::CastleQueenside(_, c) => Some(c),
            _ => None,
        }
    }

    /// Whether this move takes a piece.
    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    /// Whether this is a castling move.
    pub fn is_castle(&self) -> bool {
        self.castle().is_some()
    }

    /// Whether this move promotes a pawn.
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion(..))
    }

    /// Whether this is the null move.
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Plays this move in `pos`, consulting `promote` if a pawn reaches the back rank.
    ///
    /// This does not check whether the move is legal,
    /// see [`Position::make`] for that.
    ///
    /// # Panics
    ///
    /// Panics if this is the null move.
    pub fn execute(&self, pos: &Position, promote: &mut impl Promote) -> Position {
        self.apply(pos, Some(promote as &mut dyn Promote))
    }

    /// Plays this move, leaving promoting pawns on the back rank unless `promote` is given.
    pub(crate) fn apply(&self, pos: &Position, promote: Option<&mut dyn Promote>) -> Position {
        let step = match self.step() {
            Some(s) => s,
            None => panic!("the null move cannot be executed"),
        };

        let mover = step.piece();
        let captured = self.captured();
        let rook = self.castle().map(|c| c.rook());

        let mut setup = pos
            .pieces()
            .filter(|&p| p != mover && Some(p) != captured && Some(p) != rook)
            .fold(Setup::default(), Setup::place);

        let moved = mover.moved_to(step.whither());

        setup = match (self, promote) {
            (Move::Promotion(..), Some(promote)) => {
                let role = Role::from(promote.promote(&mover));
                setup.place(moved.promoted_to(role))
            }

            (Move::DoublePawnStep(_), _) => setup.place(moved).en_passant(moved),

            (Move::CastleKingside(_, c) | Move::CastleQueenside(_, c), _) => setup
                .place(moved)
                .place(c.rook().moved_to(c.whither()))
                .castled(mover.color()),

            _ => setup.place(moved),
        };

        for c in pos.castled() {
            setup = setup.castled(c);
        }

        setup.turn(!mover.color()).freeze()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step() {
            Some(s) => write!(f, "{}{}", s.whence(), s.whither()),
            None => f.write_str("0000"),
        }
    }
}

/// A move in pure coordinate notation, such as `e2e4`, not yet bound to a [`Position`].
///
/// See [`Position::find`] for resolving it into a [`Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", whence, whither)]
pub struct Coordinates {
    pub whence: Square,
    pub whither: Square,
}

/// The reason why parsing [`Coordinates`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[from(ignore)]
    #[display(fmt = "failed to parse move, expected coordinate notation such as `e2e4`")]
    InvalidLength,
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
}

impl FromStr for Coordinates {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_char_boundary(2) {
            return Err(ParseMoveError::InvalidLength);
        }

        Ok(Coordinates {
            whence: s[..2].parse()?,
            whither: s[2..].parse()?,
        })
    }
}
