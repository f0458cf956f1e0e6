//! One-shot command runner (`quickcache exec ...`).

use std::io;

use anyhow::Result;
use clap::Args;
use quickcache::Config;

use crate::cli::utils::{load_session, print_result};

/// Arguments for `quickcache exec`.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Command words, joined with single spaces before parsing.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// Run one command; any error ends the process with a non-zero status.
pub fn handle(config: Config, args: ExecArgs) -> Result<()> {
    let mut session = load_session(config)?;
    let line = args.words.join(" ");
    let result = session.execute(&line)?;
    print_result(&mut io::stdout(), &session, &result)?;
    Ok(())
}
