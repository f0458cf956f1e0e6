//! `open`: show the question of one flashcard without its answer.

use crate::model::Model;
use crate::values::Index;

use super::{CommandError, CommandResult, shown_flashcard};

pub const COMMAND_WORD: &str = "open";

pub const MESSAGE_USAGE: &str = "open: Shows the question of the flashcard identified by the \
index number used in the displayed flashcard list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: open 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCommand {
    target: Index,
}

impl OpenCommand {
    pub fn new(target: Index) -> Self {
        Self { target }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let card = shown_flashcard(model, self.target)?;
        Ok(CommandResult::new(card.question().render()))
    }
}
