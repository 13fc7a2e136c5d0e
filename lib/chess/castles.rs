use super::{Castle, Move, Piece, Position, Role, Rule, Square, Step};

/// Castling, generated on behalf of the king.
///
/// Both the king and the rook must have never moved, every square between them must be
/// empty, and the king may not castle out of, through or into check.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Castles;

impl Castles {
    fn castle(
        &self,
        king: &Piece,
        pos: &Position,
        rook: u8,
        empty: &[u8],
        safe: &[u8],
    ) -> Option<(Step, Castle)> {
        let row = king.square().row();
        let at = |file| Square::from_coords(file, row);

        let rook = pos[at(rook)?]?;
        if rook.role() != Role::Rook || rook.color() != king.color() || rook.has_moved() {
            return None;
        }

        for &file in empty {
            if pos[at(file)?].is_some() {
                return None;
            }
        }

        for &file in safe {
            if pos.is_attacked(at(file)?, !king.color()) {
                return None;
            }
        }

        let (king_to, rook_to) = if rook.square().file() > king.square().file() {
            (at(6)?, at(5)?)
        } else {
            (at(2)?, at(3)?)
        };

        Some((Step::new(*king, king_to), Castle::new(rook, rook_to)))
    }
}

impl Rule for Castles {
    fn moves(&self, king: &Piece, pos: &Position) -> Vec<Move> {
        if king.role() != Role::King
            || king.has_moved()
            || king.square().row() != king.color().home_row()
            || king.square().file() != 4
            || pos.is_attacked(king.square(), !king.color())
        {
            return Vec::new();
        }

        let kingside = self
            .castle(king, pos, 7, &[5, 6], &[5, 6])
            .map(|(s, c)| Move::CastleKingside(s, c));

        let queenside = self
            .castle(king, pos, 0, &[1, 2, 3], &[3, 2])
            .map(|(s, c)| Move::CastleQueenside(s, c));

        kingside.into_iter().chain(queenside).collect()
    }
}
