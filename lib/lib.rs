/// Chess domain types and rules.
pub mod chess;
/// Static position evaluation.
pub mod eval;
/// Minimax searching algorithm.
pub mod search;
/// Assorted utilities.
pub mod util;
