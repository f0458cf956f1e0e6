//! `find`: narrow the shown list to flashcards carrying all given tags.

use std::collections::BTreeSet;

use crate::model::{FlashcardFilter, Model};
use crate::values::Tag;

use super::CommandResult;

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all flashcards that carry every one of the given \
tags and displays them as a list with index numbers.\n\
Parameters: t/TAG [t/TAG]...\n\
Example: find t/math t/easy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    tags: BTreeSet<Tag>,
}

impl FindCommand {
    pub fn new(tags: BTreeSet<Tag>) -> Self {
        Self { tags }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult {
        model.update_filter(FlashcardFilter::Tags(self.tags.clone()));
        let shown = model.filtered_flashcards().len();
        CommandResult {
            show_list: true,
            ..CommandResult::new(format!("{shown} flashcards listed!"))
        }
    }
}
