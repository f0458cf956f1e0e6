//! `test`: check an attempted answer against one flashcard.
//!
//! Nothing is recorded; the command only reports whether the attempt matches.

use crate::model::Model;
use crate::question::Question;
use crate::values::{Answer, Index};

use super::{CommandError, CommandResult, resolve_choice, shown_flashcard};

pub const COMMAND_WORD: &str = "test";

pub const MESSAGE_USAGE: &str = "test: Checks an answer against the flashcard identified by the \
index number used in the displayed flashcard list. For a multiple choice question the answer is \
the number of the chosen option.\n\
Parameters: INDEX a/ANSWER\n\
Example: test 1 a/4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    target: Index,
    attempt: Answer,
}

impl TestCommand {
    pub fn new(target: Index, attempt: Answer) -> Self {
        Self { target, attempt }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let card = shown_flashcard(model, self.target)?;
        let given = match card.question() {
            Question::OpenEnded(_) => self.attempt.clone(),
            Question::Mcq(mcq) => resolve_choice(mcq, &self.attempt)?,
        };
        let feedback = if &given == card.answer() {
            format!("Correct! The answer is: {}", card.answer())
        } else {
            format!(
                "Wrong! You answered: {}. The correct answer is: {}",
                given,
                card.answer()
            )
        };
        Ok(CommandResult::new(feedback))
    }
}
