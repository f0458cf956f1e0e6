//! Command-line interface wiring for the `quickcache` binary.
//!
//! This module owns the clap definitions and delegates execution to the
//! interactive loop or the one-shot runner.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use quickcache::{Config, DEFAULT_DATA_FILE};

pub mod exec;
pub mod logging;
pub mod repl;
pub mod utils;

/// Parsed CLI entrypoint for the `quickcache` binary.
#[derive(Parser, Debug)]
#[command(
    name = "quickcache",
    version,
    about = "Build and query a personal flashcard collection"
)]
pub struct Cli {
    /// Flashcard data file (JSON lines).
    #[arg(long, global = true, env = "QUICKCACHE_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Mode to run in; defaults to the interactive loop.
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Ways of feeding commands to the collection.
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Read commands line by line from stdin until `exit` or end of input.
    Repl,
    /// Run a single command, e.g. `quickcache exec add q/What is 2+2? a/4`.
    Exec(exec::ExecArgs),
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.data.clone())
    }
}

/// Execute the requested mode.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    match cli.mode.unwrap_or(Mode::Repl) {
        Mode::Repl => repl::handle(config),
        Mode::Exec(args) => exec::handle(config, args),
    }
}
