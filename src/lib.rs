//! Core library for building and querying a personal flashcard collection
//! through short textual commands.

pub mod commands;
mod config;
mod flashcard;
mod logic;
mod model;
pub mod parser;
mod question;
mod storage;
pub mod validators;
mod values;

pub use commands::{Command, CommandError, CommandResult};
pub use config::{Config, DEFAULT_DATA_FILE};
pub use flashcard::Flashcard;
pub use logic::{LogicError, LogicManager};
pub use model::{FlashcardFilter, Model, ModelError, ModelManager, QuickCache};
pub use parser::{ParseError, parse_command, parse_index};
pub use question::{Mcq, OpenEndedQuestion, Question};
pub use storage::{JsonQuickCacheStorage, StorageHeader};
pub use values::{Answer, Choice, Index, Tag, ValidationError};
