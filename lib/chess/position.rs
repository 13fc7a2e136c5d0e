use super::{rules, Castles, Color, Coordinates, GameStatus, Move, MoveStatus, Piece};
use super::{Player, Promote, Role, Rule, Square, Transition};
use crate::util::Build;
use derive_more::{Display, Error};
use std::{fmt, ops::Index};

/// The reason why a [`Setup`] does not describe a valid [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum IllegalPosition {
    #[display(fmt = "at least one side has no king")]
    MissingKing,
    #[display(fmt = "at least one side has multiple kings")]
    TooManyKings,
    #[display(fmt = "the player in check is not to move")]
    OppositeCheck,
    #[display(fmt = "the en passant pawn is not a pawn of the side that just moved")]
    InvalidEnPassantPawn,
}

/// A mutable staging area for assembling a [`Position`].
///
/// Pieces are placed on the square they record, replacing whatever was there.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Setup {
    board: [Option<Piece>; Square::COUNT],
    turn: Color,
    en_passant: Option<Piece>,
    castled: [bool; 2],
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            board: [None; Square::COUNT],
            turn: Color::White,
            en_passant: None,
            castled: [false; 2],
        }
    }
}

impl Setup {
    /// Places a [`Piece`] on its square.
    pub fn place(mut self, piece: Piece) -> Self {
        self.board[piece.square().index()] = Some(piece);
        self
    }

    /// Sets the side to move.
    pub fn turn(mut self, color: Color) -> Self {
        self.turn = color;
        self
    }

    /// Sets the pawn that may be taken en passant on the following move.
    pub fn en_passant(mut self, pawn: Piece) -> Self {
        self.en_passant = Some(pawn);
        self
    }

    /// Records that a side has castled.
    pub fn castled(mut self, color: Color) -> Self {
        self.castled[color as usize] = true;
        self
    }

    /// Freezes this setup into a [`Position`] without checking whether it makes sense.
    ///
    /// # Panics
    ///
    /// Panics if either side does not have exactly one king.
    pub(crate) fn freeze(self) -> Position {
        if let Err(e) = self.kings() {
            panic!("{}", e);
        }

        Position {
            board: self.board,
            turn: self.turn,
            en_passant: self.en_passant,
            castled: self.castled,
        }
    }

    fn kings(&self) -> Result<(), IllegalPosition> {
        for c in [Color::White, Color::Black] {
            let kings = self
                .board
                .iter()
                .flatten()
                .filter(|p| p.color() == c && p.role() == Role::King)
                .count();

            match kings {
                0 => return Err(IllegalPosition::MissingKing),
                1 => continue,
                _ => return Err(IllegalPosition::TooManyKings),
            }
        }

        Ok(())
    }
}

impl Build for Setup {
    type Output = Position;
    type Error = IllegalPosition;

    fn build(self) -> Result<Self::Output, Self::Error> {
        self.kings()?;

        if let Some(pawn) = self.en_passant {
            if pawn.role() != Role::Pawn
                || pawn.color() == self.turn
                || self.board[pawn.square().index()] != Some(pawn)
            {
                return Err(IllegalPosition::InvalidEnPassantPawn);
            }
        }

        let pos = self.freeze();
        let king = pos.king(!pos.turn());
        if pos.is_attacked(king.square(), pos.turn()) {
            return Err(IllegalPosition::OppositeCheck);
        }

        Ok(pos)
    }
}

/// An immutable snapshot of the chess board.
///
/// This type guarantees each side has exactly one king.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    board: [Option<Piece>; Square::COUNT],
    turn: Color,
    en_passant: Option<Piece>,
    castled: [bool; 2],
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position {
    /// The standard starting position, white to move.
    pub fn initial() -> Self {
        use Role::*;
        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut setup = Setup::default().turn(Color::White);
        for c in [Color::Black, Color::White] {
            let home = c.home_row();
            let pawns = c.pawn_row();
            for (file, &role) in (0..8).zip(BACK.iter()) {
                for (row, role) in [(home, role), (pawns, Pawn)] {
                    if let Some(s) = Square::from_coords(file, row) {
                        setup = setup.place(Piece::new(c, role, s));
                    }
                }
            }
        }

        setup.freeze()
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The pawn that may be taken en passant on this move, if any.
    pub fn en_passant(&self) -> Option<Piece> {
        self.en_passant
    }

    /// Whether a side has castled at some point.
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color as usize]
    }

    /// The sides that have castled.
    pub fn castled(&self) -> impl Iterator<Item = Color> + '_ {
        [Color::White, Color::Black]
            .into_iter()
            .filter(|&c| self.has_castled(c))
    }

    /// The occupant of the square at `index`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not address a square on the board.
    pub fn square_at(&self, index: usize) -> Option<Piece> {
        self[Square::new(index)]
    }

    /// All pieces on the board, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.board.iter().flatten().copied()
    }

    /// The pieces of a [`Color`], in square order.
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// The king of a [`Color`].
    pub fn king(&self, color: Color) -> Piece {
        self.by_color(color)
            .find(|p| p.role() == Role::King)
            .expect("expected the position to have a king of each color")
    }

    /// Whether any piece of color `by` could take on `square`.
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        let holds = |s: Option<Square>, roles: &[Role]| {
            s.and_then(|s| self[s])
                .map_or(false, |p| p.color() == by && roles.contains(&p.role()))
        };

        [-1, 1]
            .into_iter()
            .any(|f| holds(square.shift(f, -by.forward()), &[Role::Pawn]))
            || rules::KNIGHT_OFFSETS
                .iter()
                .any(|&(f, r)| holds(square.shift(f, r), &[Role::Knight]))
            || rules::KING_OFFSETS
                .iter()
                .any(|&(f, r)| holds(square.shift(f, r), &[Role::King]))
            || rules::DIAGONALS
                .iter()
                .any(|&(f, r)| holds(self.ray(square, f, r), &[Role::Bishop, Role::Queen]))
            || rules::ORTHOGONALS
                .iter()
                .any(|&(f, r)| holds(self.ray(square, f, r), &[Role::Rook, Role::Queen]))
    }

    /// The first occupied square in a direction, if any.
    fn ray(&self, mut square: Square, files: i8, rows: i8) -> Option<Square> {
        while let Some(s) = square.shift(files, rows) {
            if self[s].is_some() {
                return Some(s);
            }

            square = s;
        }

        None
    }

    /// The pseudo-legal moves of a [`Color`].
    ///
    /// Pieces are visited in square order, each generating moves in the order of its own
    /// movement rule, followed by castling.
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves: Vec<_> = self.by_color(color).flat_map(|p| p.moves(self)).collect();
        moves.extend(Castles.moves(&self.king(color), self));
        moves
    }

    /// Whether playing `m` keeps the mover's own king safe.
    ///
    /// Taking the opponent's king ends the game, so it is always safe.
    pub(crate) fn is_safe(&self, m: &Move) -> bool {
        match m.piece() {
            None => false,
            Some(_) if m.captured().map(|c| c.role()) == Some(Role::King) => true,
            Some(p) => {
                let next = m.apply(self, None);
                let king = next.king(p.color());
                !next.is_attacked(king.square(), !p.color())
            }
        }
    }

    /// The view of this position from a [`Color`]'s perspective.
    pub fn player(&self, color: Color) -> Player {
        Player::new(self, color)
    }

    /// The legal moves of the side to move.
    pub fn moves(&self) -> Vec<Move> {
        self.player(self.turn).into_moves()
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        let king = self.king(self.turn);
        self.is_attacked(king.square(), !self.turn)
    }

    /// Whether the side to move has been checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    /// Whether the side to move has been stalemated.
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }

    /// The [`GameStatus`] from the perspective of the side to move.
    pub fn status(&self) -> GameStatus {
        self.player(self.turn).status()
    }

    /// Looks up the move of the side to move between two squares.
    ///
    /// Returns [`Move::Null`] if no piece of the side to move can get there.
    pub fn find(&self, Coordinates { whence, whither }: Coordinates) -> Move {
        self.pseudo_legal_moves(self.turn)
            .into_iter()
            .find(|m| m.whence() == Some(whence) && m.whither() == Some(whither))
            .unwrap_or(Move::Null)
    }

    /// Plays a [`Move`] if legal in this position.
    ///
    /// The returned [`Transition`] holds the resulting position if the move is legal,
    /// or a copy of this position otherwise.
    pub fn make(&self, m: Move, promote: &mut impl Promote) -> Transition {
        if !self.pseudo_legal_moves(self.turn).contains(&m) {
            Transition::new(self.clone(), MoveStatus::Illegal)
        } else if !self.is_safe(&m) {
            Transition::new(self.clone(), MoveStatus::LeadsToOwnCheck)
        } else {
            Transition::new(m.execute(self, promote), MoveStatus::Done)
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Position {
    type Output = Option<Piece>;

    fn index(&self, s: Square) -> &Self::Output {
        &self.board[s.index()]
    }
}

/// Prints the board one row per line, top row first.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.board.iter().enumerate() {
            match square {
                Some(p) => write!(f, "{:>3}", p.to_string())?,
                None => write!(f, "{:>3}", "-")?,
            }

            if i % 8 == 7 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Position {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use super::Promotion;
        use proptest::{collection::vec, prelude::*, sample::Selector};

        (vec(any::<Selector>(), 0..80), any::<Promotion>())
            .prop_map(|(selectors, mut promotion)| {
                let mut pos = Position::default();
                for selector in selectors {
                    let moves = pos.moves();
                    if moves.is_empty() {
                        break;
                    }

                    pos = selector.select(moves).execute(&pos, &mut promotion);
                }

                pos
            })
            .no_shrink()
            .boxed()
    }
}
