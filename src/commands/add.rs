//! `add`: put a new open-ended or multiple choice flashcard into the collection.

use tracing::warn;

use crate::flashcard::Flashcard;
use crate::model::Model;

use super::{CommandError, CommandResult};

pub const COMMAND_WORD: &str = "add";

pub const OPEN_ENDED_USAGE: &str = "add: Adds an open-ended flashcard. \
Parameters: q/QUESTION a/ANSWER [t/TAG]...\n\
Example: add q/What is 2+2? a/4 t/math";

pub const MCQ_USAGE: &str = "add: Adds a multiple choice flashcard. \
Parameters: q/QUESTION c/CHOICE c/CHOICE [c/CHOICE]... [a/CHOICE_NUMBER] [t/TAG]...\n\
Example: add q/Pick a color c/Red c/Blue a/2 t/art";

pub const MESSAGE_USAGE: &str = "add: Adds a flashcard. \
Parameters: q/QUESTION a/ANSWER [t/TAG]... \
or q/QUESTION c/CHOICE c/CHOICE [c/CHOICE]... [a/CHOICE_NUMBER] [t/TAG]...";

const MESSAGE_SUCCESS: &str = "New flashcard added: ";

/// Adds `to_add` unless an equal flashcard is already stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Flashcard,
}

impl AddCommand {
    pub fn new(flashcard: Flashcard) -> Self {
        Self { to_add: flashcard }
    }

    pub fn flashcard(&self) -> &Flashcard {
        &self.to_add
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_flashcard(&self.to_add) {
            warn!(flashcard = %self.to_add, "rejected duplicate flashcard");
            return Err(CommandError::DuplicateFlashcard);
        }
        model.add_flashcard(self.to_add.clone())?;
        Ok(CommandResult::new(format!("{MESSAGE_SUCCESS}{}", self.to_add)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelManager;
    use crate::question::OpenEndedQuestion;
    use crate::values::{Answer, Tag};

    fn card(tags: &[&str]) -> Flashcard {
        Flashcard::new(
            OpenEndedQuestion::new("What is 2+2?").unwrap().into(),
            Answer::new("4").unwrap(),
            tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
        )
    }

    #[test]
    fn adds_to_empty_model() {
        let mut model = ModelManager::default();
        let result = AddCommand::new(card(&["math"])).execute(&mut model).unwrap();
        assert!(result.feedback.starts_with(MESSAGE_SUCCESS));
        assert!(result.feedback.contains("What is 2+2?"));
        assert_eq!(model.quick_cache().len(), 1);
    }

    #[test]
    fn duplicate_leaves_model_untouched() {
        let mut model = ModelManager::default();
        AddCommand::new(card(&["math"])).execute(&mut model).unwrap();
        let err = AddCommand::new(card(&["other"]))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::DuplicateFlashcard);
        assert_eq!(err.to_string(), "This flashcard already exists in QuickCache");
        assert_eq!(model.quick_cache().len(), 1);
        assert_eq!(model.quick_cache().as_slice()[0].tags().len(), 1);
    }
}
