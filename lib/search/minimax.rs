use super::Search;
use crate::chess::{Color, Move, Position, Promotion};
use crate::eval::{Eval, Standard};
use crate::util::Build;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, str::FromStr};
use tracing::{debug, instrument};

/// Configuration for [`Minimax`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename = "config", default)]
pub struct MinimaxConfig {
    /// The number of plies to search.
    #[cfg_attr(test, strategy(0u8..=2))]
    pub depth: u8,

    /// What pawns promote to along the searched lines.
    pub promotion: Promotion,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            promotion: Promotion::default(),
        }
    }
}

/// The reason why parsing [`MinimaxConfig`] failed.
#[derive(Debug, Display, PartialEq, Error, From)]
#[display(fmt = "failed to parse minimax configuration")]
pub struct ParseMinimaxConfigError(ron::de::SpannedError);

impl FromStr for MinimaxConfig {
    type Err = ParseMinimaxConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Build for MinimaxConfig {
    type Output = Minimax<Standard>;
    type Error = Infallible;

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(Minimax::with_config(Standard::new(), self))
    }
}

/// An exhaustive implementation of [minimax].
///
/// White maximizes the evaluation and black minimizes it.
///
/// [minimax]: https://en.wikipedia.org/wiki/Minimax
#[derive(Debug, Clone)]
pub struct Minimax<E: Eval> {
    evaluator: E,
    depth: u8,
    promotion: Promotion,
}

impl<E: Eval + Default> Default for Minimax<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: Eval> Minimax<E> {
    /// Constructs [`Minimax`] with the default [`MinimaxConfig`].
    pub fn new(evaluator: E) -> Self {
        Self::with_config(evaluator, MinimaxConfig::default())
    }

    /// Constructs [`Minimax`] with some [`MinimaxConfig`].
    pub fn with_config(evaluator: E, config: MinimaxConfig) -> Self {
        Minimax {
            evaluator,
            depth: config.depth,
            promotion: config.promotion,
        }
    }

    /// The configured search depth.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// The value of `pos` searched `depth` plies deep.
    ///
    /// The evaluator is consulted at the horizon, or as soon as the side to move runs out of
    /// legal moves, with the number of plies that remained to be searched.
    pub fn value(&self, pos: &Position, depth: u8) -> i32 {
        if depth == 0 {
            return self.evaluator.eval(pos, depth);
        }

        let moves = pos.moves();
        if moves.is_empty() {
            return self.evaluator.eval(pos, depth);
        }

        let values = moves.iter().map(|m| {
            let next = m.execute(pos, &mut self.promotion.clone());
            self.value(&next, depth - 1)
        });

        match pos.turn() {
            Color::White => values.max(),
            Color::Black => values.min(),
        }
        .expect("expected at least one legal move")
    }
}

impl<E: Eval> Search for Minimax<E> {
    #[instrument(level = "debug", skip(self, pos), fields(turn = %pos.turn()))]
    fn search(&self, pos: &Position, depth: u8) -> Move {
        let mut best: Option<(Move, i32)> = None;

        for m in pos.moves() {
            let next = m.execute(pos, &mut self.promotion.clone());
            let value = self.value(&next, depth.saturating_sub(1));

            debug!(%m, value);

            let improves = match (best, pos.turn()) {
                (None, _) => true,
                (Some((_, v)), Color::White) => value > v,
                (Some((_, v)), Color::Black) => value < v,
            };

            if improves {
                best = Some((m, value));
            }
        }

        match best {
            None => Move::Null,
            Some((m, value)) => {
                debug!(best = %m, value);
                m
            }
        }
    }
}
