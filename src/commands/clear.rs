//! `clear`: empty the collection.

use crate::model::Model;

use super::CommandResult;

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_USAGE: &str = "clear: Deletes every flashcard.";

pub fn execute(model: &mut dyn Model) -> CommandResult {
    model.clear();
    CommandResult::new("QuickCache has been cleared!")
}
