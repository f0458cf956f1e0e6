//! `list`: show every flashcard again after a `find`.

use crate::model::{FlashcardFilter, Model};

use super::CommandResult;

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_USAGE: &str = "list: Lists all flashcards.";

pub fn execute(model: &mut dyn Model) -> CommandResult {
    model.update_filter(FlashcardFilter::All);
    CommandResult {
        show_list: true,
        ..CommandResult::new("Listed all flashcards")
    }
}
