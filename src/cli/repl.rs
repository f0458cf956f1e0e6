//! Interactive read-eval loop (`quickcache repl`).

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use quickcache::{Config, LogicManager, Model};
use tracing::info;

use crate::cli::utils::{load_session, print_result};

const PROMPT: &str = "> ";

/// Read commands from stdin until `exit` or end of input.
pub fn handle(config: Config) -> Result<()> {
    let mut session = load_session(config)?;
    let interactive = io::stdin().is_terminal();
    info!(
        data = %session.config().data_file.display(),
        flashcards = session.model().quick_cache().len(),
        "session started"
    );
    if interactive {
        println!("Welcome to QuickCache! Type `help` to see the available commands.");
    }
    let stdin = io::stdin();
    run_lines(
        &mut session,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        interactive,
    )
}

/// Feed every line of `input` to `session`. Errors go to `err` and the loop carries on.
pub fn run_lines(
    session: &mut LogicManager,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    interactive: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush().context("failed to flush stdout")?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match session.execute(&line) {
            Ok(result) => {
                print_result(out, session, &result)?;
                if result.exit {
                    break;
                }
            }
            Err(e) => writeln!(err, "{e}")?,
        }
    }
    Ok(())
}
