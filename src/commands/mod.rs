//! Executable commands.
//!
//! Each command family lives in its own module next to its command word and
//! usage text. Commands are one-shot: they receive the model explicitly,
//! act on it, and report back through a [`CommandResult`].

use thiserror::Error;

use crate::flashcard::Flashcard;
use crate::model::{Model, ModelError};
use crate::question::Mcq;
use crate::values::{Answer, Index};

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod open;
pub mod quiz;

/// Failures that only show up when a command meets the current model state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("This flashcard already exists in QuickCache")]
    DuplicateFlashcard,
    #[error("The flashcard index provided is invalid")]
    InvalidIndex,
    #[error("The choice provided is invalid: answer with a choice number from 1 to {count}")]
    InvalidChoice { count: usize },
}

impl From<ModelError> for CommandError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Duplicate => CommandError::DuplicateFlashcard,
            ModelError::NotFound => CommandError::InvalidIndex,
        }
    }
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    /// The shown list changed and should be displayed again.
    pub show_list: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new<S: Into<String>>(feedback: S) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            show_list: false,
            exit: false,
        }
    }
}

/// A parsed, ready-to-run command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(add::AddCommand),
    Delete(delete::DeleteCommand),
    Edit(edit::EditCommand),
    List,
    Find(find::FindCommand),
    Open(open::OpenCommand),
    Test(quiz::TestCommand),
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(cmd) => cmd.execute(model),
            Command::Delete(cmd) => cmd.execute(model),
            Command::Edit(cmd) => cmd.execute(model),
            Command::List => Ok(list::execute(model)),
            Command::Find(cmd) => Ok(cmd.execute(model)),
            Command::Open(cmd) => cmd.execute(model),
            Command::Test(cmd) => cmd.execute(model),
            Command::Clear => Ok(clear::execute(model)),
            Command::Help => Ok(help::execute()),
            Command::Exit => Ok(exit::execute()),
        }
    }

    /// Whether a successful run changes the stored collection.
    pub fn mutates_collection(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Delete(_) | Command::Edit(_) | Command::Clear
        )
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::Open(_) => open::COMMAND_WORD,
            Command::Test(_) => quiz::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
            Command::Exit => exit::COMMAND_WORD,
        }
    }
}

/// Look up the flashcard shown at `index` in the current filtered view.
pub(crate) fn shown_flashcard(
    model: &dyn Model,
    index: Index,
) -> Result<Flashcard, CommandError> {
    model
        .filtered_flashcards()
        .get(index.zero_based())
        .map(|card| (*card).clone())
        .ok_or(CommandError::InvalidIndex)
}

/// Read `raw` as a 1-based choice number of `mcq` and return the chosen answer.
pub(crate) fn resolve_choice(mcq: &Mcq, raw: &Answer) -> Result<Answer, CommandError> {
    let invalid = || CommandError::InvalidChoice {
        count: mcq.choices().len(),
    };
    let index: Index = raw.as_str().parse().map_err(|_| invalid())?;
    if !mcq.contains_index(index) {
        return Err(invalid());
    }
    Ok(mcq.resolve_option(index))
}
