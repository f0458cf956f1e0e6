//! `delete`: remove the flashcard shown at a position.

use crate::model::Model;
use crate::values::Index;

use super::{CommandError, CommandResult, shown_flashcard};

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the flashcard identified by the index number \
used in the displayed flashcard list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target: Index,
}

impl DeleteCommand {
    pub fn new(target: Index) -> Self {
        Self { target }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let card = shown_flashcard(model, self.target)?;
        let removed = model.delete_flashcard(&card)?;
        Ok(CommandResult::new(format!("Deleted flashcard: {removed}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcard::Flashcard;
    use crate::model::{FlashcardFilter, ModelManager};
    use crate::question::OpenEndedQuestion;
    use crate::values::{Answer, Tag};

    fn card(question: &str, tags: &[&str]) -> Flashcard {
        Flashcard::new(
            OpenEndedQuestion::new(question).unwrap().into(),
            Answer::new("A").unwrap(),
            tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
        )
    }

    #[test]
    fn deletes_by_shown_position() {
        let mut model = ModelManager::default();
        model.add_flashcard(card("Q1", &[])).unwrap();
        model.add_flashcard(card("Q2", &["keep"])).unwrap();
        model.update_filter(FlashcardFilter::Tags(
            [Tag::new("keep").unwrap()].into_iter().collect(),
        ));

        let result = DeleteCommand::new(Index::from_one_based(1).unwrap())
            .execute(&mut model)
            .unwrap();
        assert!(result.feedback.contains("Q2"));
        assert_eq!(model.quick_cache().len(), 1);
        assert_eq!(model.quick_cache().as_slice()[0].question().text(), "Q1");
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut model = ModelManager::default();
        model.add_flashcard(card("Q1", &[])).unwrap();
        let err = DeleteCommand::new(Index::from_one_based(2).unwrap())
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::InvalidIndex);
        assert_eq!(model.quick_cache().len(), 1);
    }
}
