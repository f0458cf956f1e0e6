//! Convenience helpers shared across modes.

use std::io::{self, Write};

use anyhow::{Context, Result};
use quickcache::{CommandResult, Config, LogicManager, Model};

/// Load the collection named in `config`, attaching the path to any error.
pub fn load_session(config: Config) -> Result<LogicManager> {
    let path = config.data_file.clone();
    LogicManager::load(config)
        .with_context(|| format!("failed to load flashcards from {}", path.display()))
}

/// Write a command's feedback, followed by the shown list when it changed.
pub fn print_result(
    out: &mut impl Write,
    session: &LogicManager,
    result: &CommandResult,
) -> io::Result<()> {
    writeln!(out, "{}", result.feedback)?;
    if result.show_list {
        let listing = format_shown(session.model());
        if !listing.is_empty() {
            writeln!(out, "{listing}")?;
        }
    }
    Ok(())
}

/// Numbered listing of the flashcards currently shown.
pub fn format_shown(model: &dyn Model) -> String {
    model
        .filtered_flashcards()
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}. {}", i + 1, card))
        .collect::<Vec<_>>()
        .join("\n")
}
