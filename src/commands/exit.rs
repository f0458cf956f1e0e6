//! `exit`: leave the session.

use super::CommandResult;

pub const COMMAND_WORD: &str = "exit";

pub const MESSAGE_USAGE: &str = "exit: Exits QuickCache.";

pub fn execute() -> CommandResult {
    CommandResult {
        exit: true,
        ..CommandResult::new("Exiting QuickCache as requested ...")
    }
}
