use super::{replay, Execute};
use anyhow::Error as Anyhow;
use async_trait::async_trait;
use clap::Parser;
use lib::chess::Coordinates;
use lib::search::{MinimaxConfig, Search};
use lib::util::Build;
use tokio::task::spawn_blocking;
use tracing::{info, instrument};

/// Analyzes the position reached by playing some moves from the initial position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    /// The engine configuration.
    #[clap(short, long, default_value_t)]
    config: MinimaxConfig,

    /// Moves in coordinate notation, such as `e2e4`.
    moves: Vec<Coordinates>,
}

#[async_trait]
impl Execute for Analyze {
    #[instrument(level = "trace", skip(self), err)]
    async fn execute(self) -> Result<(), Anyhow> {
        let mut promotion = self.config.promotion;
        let pos = replay(&self.moves, &mut promotion)?;
        let engine = self.config.build()?;

        println!("{}", pos);

        let moves: Vec<_> = pos.moves().iter().map(|m| m.to_string()).collect();
        info!(turn = %pos.turn(), status = %pos.status(), moves = %moves.join(" "));

        let depth = engine.depth();
        let best = spawn_blocking(move || engine.search(&pos, depth)).await?;

        info!(depth, %best);
        println!("{}", best);

        Ok(())
    }
}
