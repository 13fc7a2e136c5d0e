use super::{depth_bonus, Eval};
use crate::chess::{Color, Position};
use derive_more::Constructor;

/// Scores positions by material, mobility, checks, checkmates and castling.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Standard {}

impl Standard {
    /// The bonus for giving check.
    pub const CHECK: i32 = 50;

    /// The base bonus for giving checkmate, weighted by [`depth_bonus`].
    pub const CHECKMATE: i32 = 10000;

    /// The bonus for having castled.
    pub const CASTLED: i32 = 60;

    /// The score of one side, regardless of the other side's.
    pub fn score(&self, pos: &Position, color: Color, depth: u8) -> i32 {
        let material: i32 = pos.by_color(color).map(|p| p.role().value()).sum();
        let mobility = pos.player(color).moves().len() as i32;

        let opponent = pos.player(!color);
        let check = if opponent.is_in_check() { Self::CHECK } else { 0 };

        let checkmate = if opponent.is_in_checkmate() {
            Self::CHECKMATE * depth_bonus(depth)
        } else {
            0
        };

        let castled = if pos.has_castled(color) { Self::CASTLED } else { 0 };

        material + mobility + check + checkmate + castled
    }
}

impl Eval for Standard {
    fn eval(&self, pos: &Position, depth: u8) -> i32 {
        self.score(pos, Color::White, depth) - self.score(pos, Color::Black, depth)
    }
}
