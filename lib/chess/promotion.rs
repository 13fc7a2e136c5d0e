use super::{Piece, Role};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The [`Role`]s a pawn may promote to.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Promotion {
    #[display(fmt = "n")]
    Knight,
    #[display(fmt = "b")]
    Bishop,
    #[display(fmt = "r")]
    Rook,
    #[display(fmt = "q")]
    Queen,
}

impl Default for Promotion {
    fn default() -> Self {
        Promotion::Queen
    }
}

impl From<Promotion> for Role {
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::Knight => Role::Knight,
            Promotion::Bishop => Role::Bishop,
            Promotion::Rook => Role::Rook,
            Promotion::Queen => Role::Queen,
        }
    }
}

/// The reason why parsing [`Promotion`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse promotion, expected one of `n`, `b`, `r` or `q`")]
pub struct ParsePromotionError;

impl FromStr for Promotion {
    type Err = ParsePromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Promotion::Knight),
            "b" => Ok(Promotion::Bishop),
            "r" => Ok(Promotion::Rook),
            "q" => Ok(Promotion::Queen),
            _ => Err(ParsePromotionError),
        }
    }
}

/// Trait for types that decide what a pawn reaching the back rank promotes to.
///
/// It is consulted exactly once whenever a promoting move is executed.
pub trait Promote {
    /// Chooses the [`Promotion`] for `pawn`.
    fn promote(&mut self, pawn: &Piece) -> Promotion;
}

/// Always promotes to the same [`Role`].
impl Promote for Promotion {
    fn promote(&mut self, _: &Piece) -> Promotion {
        *self
    }
}

impl<F: FnMut(&Piece) -> Promotion> Promote for F {
    fn promote(&mut self, pawn: &Piece) -> Promotion {
        self(pawn)
    }
}
