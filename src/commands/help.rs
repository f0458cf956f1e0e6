//! `help`: print every command's usage.

use super::{CommandResult, add, clear, delete, edit, exit, find, list, open, quiz};

pub const COMMAND_WORD: &str = "help";

pub const MESSAGE_USAGE: &str = "help: Shows the usage of every command.";

/// Usage text of all commands, one paragraph each.
pub fn help_text() -> String {
    [
        add::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        edit::MESSAGE_USAGE,
        list::MESSAGE_USAGE,
        find::MESSAGE_USAGE,
        open::MESSAGE_USAGE,
        quiz::MESSAGE_USAGE,
        clear::MESSAGE_USAGE,
        MESSAGE_USAGE,
        exit::MESSAGE_USAGE,
    ]
    .join("\n\n")
}

pub fn execute() -> CommandResult {
    CommandResult {
        show_help: true,
        ..CommandResult::new(help_text())
    }
}
