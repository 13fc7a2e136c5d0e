use super::Rule;
use crate::chess::{Move, Piece, Position, Role, Step};

/// Advances one square, or two from its starting row, and captures diagonally.
///
/// Reaching the opponent's back rank promotes the pawn.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pawn;

impl Pawn {
    fn capture(&self, piece: &Piece, pos: &Position, files: i8) -> Option<Move> {
        let color = piece.color();
        let whither = piece.square().shift(files, color.forward())?;
        let step = Step::new(*piece, whither);

        match pos[whither] {
            Some(p) if p.color() == color => None,
            Some(p) if whither.row() == color.promotion_row() => Some(Move::Promotion(step, Some(p))),
            Some(p) => Some(Move::Capture(step, p)),
            None => {
                let beside = piece.square().shift(files, 0)?;
                let ep = pos.en_passant()?;

                if ep.square() == beside && ep.color() != color && ep.role() == Role::Pawn {
                    Some(Move::EnPassant(step, ep))
                } else {
                    None
                }
            }
        }
    }

    fn advance(&self, piece: &Piece, pos: &Position) -> Option<Move> {
        let color = piece.color();
        let whither = piece.square().shift(0, color.forward())?;
        let step = Step::new(*piece, whither);

        match pos[whither] {
            Some(_) => None,
            None if whither.row() == color.promotion_row() => Some(Move::Promotion(step, None)),
            None => Some(Move::Quiet(step)),
        }
    }

    fn double_step(&self, piece: &Piece, pos: &Position) -> Option<Move> {
        let color = piece.color();
        if piece.square().row() != color.pawn_row() {
            return None;
        }

        let through = piece.square().shift(0, color.forward())?;
        let whither = piece.square().shift(0, 2 * color.forward())?;

        match (pos[through], pos[whither]) {
            (None, None) => Some(Move::DoublePawnStep(Step::new(*piece, whither))),
            _ => None,
        }
    }
}

impl Rule for Pawn {
    fn moves(&self, piece: &Piece, pos: &Position) -> Vec<Move> {
        let f = piece.color().forward();

        [
            self.capture(piece, pos, -f),
            self.advance(piece, pos),
            self.capture(piece, pos, f),
            self.double_step(piece, pos),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
