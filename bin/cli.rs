use crate::applet::{Applet, Execute};
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, future::Future, io::stderr};
use tokio::runtime;
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// A chess engine that searches every line to a fixed depth.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// How much to log on stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// What to do, playing a game if omitted.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Logs to stderr and runs the [`Applet`] to completion.
    pub fn execute(self) -> Result<(), Anyhow> {
        self.trace();
        let applet = self.applet.unwrap_or_default();
        block_on(async move { applet.execute().await })
    }

    fn trace(&self) {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();
    }
}

/// Drives `task` on a fresh runtime.
///
/// Blocking searches still running once `task` resolves are abandoned rather than awaited.
#[instrument(level = "trace", skip(task), err)]
fn block_on<F>(task: F) -> Result<(), Anyhow>
where
    F: Future<Output = Result<(), Anyhow>>,
{
    let rt = runtime::Builder::new_multi_thread().enable_all().build()?;
    let result = rt.block_on(task);
    rt.shutdown_background();
    result
}
