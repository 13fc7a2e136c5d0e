use super::Execute;
use anyhow::{bail, Error as Anyhow};
use async_trait::async_trait;
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::chess::{Color, GameStatus, Position};
use lib::search::{MinimaxConfig, Search};
use lib::util::Build;
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::Arc, time::Duration};
use tokio::{task::spawn_blocking, time::timeout};
use tracing::{info, instrument};

/// Limits imposed on a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename = "limits", default)]
pub struct PlayLimits {
    /// How long each side may think about a move.
    #[serde(with = "humantime_serde")]
    pub time: Option<Duration>,

    /// How many plies to play before calling the game off.
    pub plies: u32,
}

impl Default for PlayLimits {
    fn default() -> Self {
        PlayLimits {
            time: None,
            plies: 200,
        }
    }
}

/// The reason why parsing [`PlayLimits`] failed.
#[derive(Debug, Display, PartialEq, Error, From)]
#[display(fmt = "failed to parse game limits")]
pub struct ParsePlayLimitsError(ron::de::SpannedError);

impl FromStr for PlayLimits {
    type Err = ParsePlayLimitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// How a game ended.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq)]
enum Outcome {
    #[display(fmt = "{} wins by checkmate", _0)]
    Checkmate(Color),
    #[display(fmt = "draw by stalemate")]
    Stalemate,
    #[display(fmt = "{} loses on time", _0)]
    Timeout(Color),
    #[display(fmt = "no result after {} plies", _0)]
    Unfinished(u32),
}

/// A game of chess between two engines.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The engine playing the white pieces.
    #[clap(short, long, default_value_t)]
    white: MinimaxConfig,

    /// The engine playing the black pieces.
    #[clap(short, long, default_value_t)]
    black: MinimaxConfig,

    /// Time and length limits, such as `limits(time: Some("5s"), plies: 100)`.
    #[clap(short, long, default_value_t)]
    limits: PlayLimits,
}

#[async_trait]
impl Execute for Play {
    #[instrument(level = "trace", skip(self), err)]
    async fn execute(self) -> Result<(), Anyhow> {
        let mut configs = [self.white, self.black];
        let engines = [Arc::new(self.white.build()?), Arc::new(self.black.build()?)];

        let mut pos = Position::initial();
        let mut history = Vec::new();

        let outcome = loop {
            match pos.status() {
                GameStatus::Checkmate => break Outcome::Checkmate(!pos.turn()),
                GameStatus::Stalemate => break Outcome::Stalemate,
                GameStatus::Ongoing | GameStatus::Check => {}
            }

            if history.len() as u32 >= self.limits.plies {
                break Outcome::Unfinished(self.limits.plies);
            }

            let turn = pos.turn();
            let engine = engines[turn as usize].clone();
            let snapshot = pos.clone();
            let search = spawn_blocking(move || engine.search(&snapshot, engine.depth()));

            let m = match self.limits.time {
                None => search.await?,
                Some(t) => match timeout(t, search).await {
                    Ok(m) => m?,
                    Err(_) => break Outcome::Timeout(turn),
                },
            };

            let t = pos.make(m, &mut configs[turn as usize].promotion);
            if !t.status().is_done() {
                bail!("{} engine played `{}`, {}", turn, m, t.status());
            }

            info!(ply = history.len() + 1, %turn, %m, status = %t.position().status());

            history.push(m.to_string());
            pos = t.into_position();
        };

        println!("{}", pos);
        println!("{}", history.join(" "));
        info!(%outcome, plies = history.len());

        Ok(())
    }
}
