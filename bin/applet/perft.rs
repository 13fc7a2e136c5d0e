use super::{replay, Execute};
use anyhow::Error as Anyhow;
use async_trait::async_trait;
use clap::Parser;
use lib::chess::{Coordinates, Position, Promotion};
use rayon::prelude::*;
use tokio::task::spawn_blocking;
use tracing::{info, instrument};

/// Counts the leaf nodes of the tree of legal moves.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// How many plies deep to count.
    depth: u8,

    /// Moves in coordinate notation, such as `e2e4`, leading to the root position.
    moves: Vec<Coordinates>,
}

fn perft(pos: &Position, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => pos.moves().len(),
        d => pos
            .moves()
            .into_iter()
            .map(|m| perft(&m.execute(pos, &mut Promotion::Queen), d - 1))
            .sum(),
    }
}

#[async_trait]
impl Execute for Perft {
    #[instrument(level = "trace", skip(self), err)]
    async fn execute(self) -> Result<(), Anyhow> {
        let pos = replay(&self.moves, &mut Promotion::Queen)?;
        let depth = self.depth;

        let divide: Vec<_> = spawn_blocking(move || {
            pos.moves()
                .into_par_iter()
                .map(|m| {
                    let next = m.execute(&pos, &mut Promotion::Queen);
                    (m, perft(&next, depth.saturating_sub(1)))
                })
                .collect()
        })
        .await?;

        for (m, nodes) in &divide {
            println!("{}: {}", m, nodes);
        }

        let nodes: usize = match depth {
            0 => 1,
            _ => divide.iter().map(|(_, n)| n).sum(),
        };

        info!(depth, nodes);
        println!("{}", nodes);

        Ok(())
    }
}
