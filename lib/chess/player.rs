use super::{Color, GameStatus, Move, Piece, Position};

/// One side's view of a [`Position`].
///
/// The legal moves are those the side would have if it were on move.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Player {
    color: Color,
    king: Piece,
    moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    /// Constructs the [`Player`] of a [`Color`] in `pos`.
    pub fn new(pos: &Position, color: Color) -> Self {
        let king = pos.king(color);
        let moves = pos
            .pseudo_legal_moves(color)
            .into_iter()
            .filter(|m| pos.is_safe(m))
            .collect();

        Player {
            color,
            king,
            moves,
            in_check: pos.is_attacked(king.square(), !color),
        }
    }

    /// This player's [`Color`].
    pub fn color(&self) -> Color {
        self.color
    }

    /// This player's king.
    pub fn king(&self) -> Piece {
        self.king
    }

    /// This player's legal moves.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Consumes this player, returning its legal moves.
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Whether this player's king is attacked.
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// Whether this player is in check without any legal moves.
    pub fn is_in_checkmate(&self) -> bool {
        self.in_check && self.moves.is_empty()
    }

    /// Whether this player is not in check but has no legal moves.
    pub fn is_in_stalemate(&self) -> bool {
        !self.in_check && self.moves.is_empty()
    }

    /// The [`GameStatus`] were it this player's turn.
    pub fn status(&self) -> GameStatus {
        match (self.in_check, self.moves.is_empty()) {
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn player_of_the_side_to_move_has_the_legal_moves(pos: Position) {
        let p = pos.player(pos.turn());
        assert_eq!(p.color(), pos.turn());
        assert_eq!(p.king(), pos.king(pos.turn()));
        assert_eq!(p.moves(), &pos.moves()[..]);
        assert_eq!(p.is_in_check(), pos.is_check());
        assert_eq!(p.status(), pos.status());
    }

    #[proptest]
    fn side_not_to_move_is_never_in_check(pos: Position) {
        let p = pos.player(!pos.turn());
        assert!(!p.is_in_check());
        assert!(!p.is_in_checkmate());
    }

    #[proptest]
    fn player_moves_belong_to_the_player(pos: Position, c: Color) {
        for m in pos.player(c).moves() {
            assert_eq!(m.piece().map(|p| p.color()), Some(c));
        }
    }

    #[test]
    fn both_players_have_twenty_moves_initially() {
        let pos = Position::initial();
        assert_eq!(pos.player(Color::White).moves().len(), 20);
        assert_eq!(pos.player(Color::Black).moves().len(), 20);
    }
}
