use anyhow::{bail, Error as Anyhow};
use async_trait::async_trait;
use clap::Subcommand;
use lib::chess::{Coordinates, Position, Promote};
use tracing::warn;

mod analyze;
mod perft;
mod play;

/// Trait for types that behave like subcommands.
#[async_trait]
pub trait Execute {
    /// Execute the subcommand.
    async fn execute(self) -> Result<(), Anyhow>;
}

#[derive(Subcommand)]
pub enum Applet {
    Analyze(analyze::Analyze),
    Play(play::Play),
    Perft(perft::Perft),
}

impl Default for Applet {
    fn default() -> Self {
        Applet::Play(play::Play::default())
    }
}

#[async_trait]
impl Execute for Applet {
    async fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Analyze(a) => Ok(a.execute().await?),
            Applet::Play(a) => Ok(a.execute().await?),
            Applet::Perft(a) => Ok(a.execute().await?),
        }
    }
}

/// Replays moves in coordinate notation from the initial position.
fn replay<P: Promote>(moves: &[Coordinates], promote: &mut P) -> Result<Position, Anyhow> {
    let mut pos = Position::initial();

    for &c in moves {
        let t = pos.make(pos.find(c), promote);
        if !t.status().is_done() {
            warn!(coordinates = %c, status = %t.status(), "rejected move");
            bail!("cannot play `{}`, {}", c, t.status());
        }

        pos = t.into_position();
    }

    Ok(pos)
}
