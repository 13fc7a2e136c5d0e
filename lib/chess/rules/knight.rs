use super::{leap, Rule, KNIGHT_OFFSETS};
use crate::chess::{Move, Piece, Position};

/// Jumps in an L shape, over any pieces in between.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Knight;

impl Rule for Knight {
    fn moves(&self, piece: &Piece, pos: &Position) -> Vec<Move> {
        leap(piece, pos, &KNIGHT_OFFSETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, Role, Setup, Square, Step};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn kings() -> Setup {
        Setup::default()
            .place(Piece::new(Color::White, Role::King, sq("h1")))
            .place(Piece::new(Color::Black, Role::King, sq("h8")))
    }

    fn targets(n: Piece) -> Vec<String> {
        let pos = kings().place(n).freeze();
        let moves = Knight.moves(&n, &pos);
        moves.iter().flat_map(Move::whither).map(|s| s.to_string()).collect()
    }

    #[test]
    fn knight_in_the_center_has_eight_moves() {
        assert_eq!(
            targets(Piece::new(Color::White, Role::Knight, sq("d4"))),
            ["c6", "e6", "b5", "f5", "b3", "f3", "c2", "e2"]
        );
    }

    #[test]
    fn knight_does_not_wrap_around_the_edges() {
        assert_eq!(
            targets(Piece::new(Color::White, Role::Knight, sq("a4"))),
            ["b6", "c5", "c3", "b2"]
        );

        assert_eq!(
            targets(Piece::new(Color::Black, Role::Knight, sq("h5"))),
            ["g7", "f6", "f4", "g3"]
        );
    }

    #[test]
    fn knight_captures_but_does_not_land_on_friends() {
        let n = Piece::new(Color::White, Role::Knight, sq("b1"));
        let pawn = Piece::new(Color::White, Role::Pawn, sq("d2"));
        let rook = Piece::new(Color::Black, Role::Rook, sq("c3"));
        let pos = kings().place(n).place(pawn).place(rook).freeze();

        assert_eq!(
            Knight.moves(&n, &pos),
            [
                Move::Quiet(Step::new(n, sq("a3"))),
                Move::Capture(Step::new(n, sq("c3")), rook)
            ]
        );
    }
}
