//! `edit`: replace fields of the flashcard shown at a position.

use std::collections::BTreeSet;

use crate::flashcard::Flashcard;
use crate::model::Model;
use crate::question::{OpenEndedQuestion, Question};
use crate::values::{Answer, Index, Tag};

use super::{CommandError, CommandResult, resolve_choice, shown_flashcard};

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the flashcard identified by the index number used \
in the displayed flashcard list. Existing values are overwritten; a multiple choice question \
keeps its choices and takes a choice number as its answer. An empty t/ removes all tags.\n\
Parameters: INDEX [q/QUESTION] [a/ANSWER] [t/TAG]...\n\
Example: edit 1 q/What is 3+3? a/6";

/// Fields to overwrite; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFlashcardDescriptor {
    pub question: Option<OpenEndedQuestion>,
    pub answer: Option<Answer>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditFlashcardDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.question.is_some() || self.answer.is_some() || self.tags.is_some()
    }

    /// Build the replacement for `target`.
    fn apply(&self, target: &Flashcard) -> Result<Flashcard, CommandError> {
        let question = match (&self.question, target.question()) {
            (None, current) => current.clone(),
            (Some(stem), Question::OpenEnded(_)) => stem.clone().into(),
            (Some(stem), Question::Mcq(mcq)) => mcq.with_stem(stem).into(),
        };
        let answer = match (&self.answer, &question) {
            (None, _) => target.answer().clone(),
            (Some(answer), Question::OpenEnded(_)) => answer.clone(),
            (Some(answer), Question::Mcq(mcq)) => resolve_choice(mcq, answer)?,
        };
        let tags = self.tags.clone().unwrap_or_else(|| target.tags().clone());
        Ok(Flashcard::new(question, answer, tags))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditFlashcardDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditFlashcardDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditFlashcardDescriptor {
        &self.descriptor
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = shown_flashcard(model, self.index)?;
        let edited = self.descriptor.apply(&target)?;
        let feedback = format!("Edited flashcard: {edited}");
        model.set_flashcard(&target, edited)?;
        Ok(CommandResult::new(feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelManager;
    use crate::question::Mcq;
    use crate::values::Choice;

    fn open(question: &str, answer: &str) -> Flashcard {
        Flashcard::new(
            OpenEndedQuestion::new(question).unwrap().into(),
            Answer::new(answer).unwrap(),
            [Tag::new("old").unwrap()].into_iter().collect(),
        )
    }

    fn mcq() -> Flashcard {
        let choices = ["Red", "Blue"].iter().map(|c| Choice::new(c).unwrap()).collect();
        Flashcard::new(
            Mcq::new("Pick a color", choices).unwrap().into(),
            Answer::new("Red").unwrap(),
            BTreeSet::new(),
        )
    }

    fn edit(index: usize, descriptor: EditFlashcardDescriptor) -> EditCommand {
        EditCommand::new(Index::from_one_based(index).unwrap(), descriptor)
    }

    #[test]
    fn replaces_open_ended_fields() {
        let mut model = ModelManager::default();
        model.add_flashcard(open("Q", "A")).unwrap();
        let descriptor = EditFlashcardDescriptor {
            question: Some(OpenEndedQuestion::new("Q2").unwrap()),
            tags: Some(BTreeSet::new()),
            ..Default::default()
        };
        edit(1, descriptor).execute(&mut model).unwrap();
        let card = &model.quick_cache().as_slice()[0];
        assert_eq!(card.question().render(), "Q2");
        assert_eq!(card.answer().as_str(), "A");
        assert!(card.tags().is_empty());
    }

    #[test]
    fn mcq_keeps_choices_and_takes_choice_number() {
        let mut model = ModelManager::default();
        model.add_flashcard(mcq()).unwrap();
        let descriptor = EditFlashcardDescriptor {
            question: Some(OpenEndedQuestion::new("Pick another").unwrap()),
            answer: Some(Answer::new("2").unwrap()),
            ..Default::default()
        };
        edit(1, descriptor).execute(&mut model).unwrap();
        let card = &model.quick_cache().as_slice()[0];
        assert_eq!(card.question().render(), "Pick another\n1. Red\n2. Blue\n");
        assert_eq!(card.answer().as_str(), "Blue");

        let descriptor = EditFlashcardDescriptor {
            answer: Some(Answer::new("Blue").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            edit(1, descriptor).execute(&mut model),
            Err(CommandError::InvalidChoice { count: 2 })
        );
    }

    #[test]
    fn rejects_collision_with_other_card() {
        let mut model = ModelManager::default();
        model.add_flashcard(open("Q1", "A")).unwrap();
        model.add_flashcard(open("Q2", "A")).unwrap();
        let descriptor = EditFlashcardDescriptor {
            question: Some(OpenEndedQuestion::new("Q1").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            edit(2, descriptor).execute(&mut model),
            Err(CommandError::DuplicateFlashcard)
        );
        assert_eq!(model.quick_cache().as_slice()[1].question().text(), "Q2");
    }

    #[test]
    fn invalid_index() {
        let mut model = ModelManager::default();
        let descriptor = EditFlashcardDescriptor {
            answer: Some(Answer::new("x").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            edit(1, descriptor).execute(&mut model),
            Err(CommandError::InvalidIndex)
        );
    }
}
