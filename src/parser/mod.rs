//! Turns one line of user input into a validated [`Command`].
//!
//! A line is a command word followed by an argument string. The argument
//! string is split on prefixes (see [`tokenizer`]) and each field is run
//! through its value object's smart constructor before the command is built,
//! so a [`Command`] that exists only carries valid data.

mod add;
mod edit;
pub mod tokenizer;
pub mod util;

use thiserror::Error;
use tracing::debug;

use crate::commands::{self, Command};
use crate::values::{Index, ValidationError};

use tokenizer::{PREFIX_ANSWER, PREFIX_TAG, tokenize};
pub use util::parse_index;

/// Why a line of input could not become a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },
    #[error("Unknown command")]
    UnknownCommand,
    #[error("Choice {index} does not exist: the question only has {count} choices")]
    ChoiceOutOfRange { index: Index, count: usize },
    #[error("At least one field to edit must be provided.")]
    NoFieldsToEdit,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ParseError {
    pub(crate) fn usage(usage: &'static str) -> Self {
        ParseError::InvalidFormat { usage }
    }
}

/// Parse a full input line.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::usage(commands::help::MESSAGE_USAGE));
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };
    debug!(command = word, "parsing command");

    let command = match word {
        commands::add::COMMAND_WORD => Command::Add(add::parse(args)?),
        commands::delete::COMMAND_WORD => Command::Delete(parse_delete(args)?),
        commands::edit::COMMAND_WORD => Command::Edit(edit::parse(args)?),
        commands::list::COMMAND_WORD => Command::List,
        commands::find::COMMAND_WORD => Command::Find(parse_find(args)?),
        commands::open::COMMAND_WORD => Command::Open(parse_open(args)?),
        commands::quiz::COMMAND_WORD => Command::Test(parse_test(args)?),
        commands::clear::COMMAND_WORD => Command::Clear,
        commands::help::COMMAND_WORD => Command::Help,
        commands::exit::COMMAND_WORD => Command::Exit,
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(command)
}

fn parse_delete(args: &str) -> Result<commands::delete::DeleteCommand, ParseError> {
    let index =
        parse_index(args).map_err(|_| ParseError::usage(commands::delete::MESSAGE_USAGE))?;
    Ok(commands::delete::DeleteCommand::new(index))
}

fn parse_open(args: &str) -> Result<commands::open::OpenCommand, ParseError> {
    let index = parse_index(args).map_err(|_| ParseError::usage(commands::open::MESSAGE_USAGE))?;
    Ok(commands::open::OpenCommand::new(index))
}

fn parse_find(args: &str) -> Result<commands::find::FindCommand, ParseError> {
    let map = tokenize(args);
    let raw_tags = map.all_values(PREFIX_TAG);
    if !map.preamble().is_empty() || raw_tags.is_empty() || map.has_unexpected(&[PREFIX_TAG])
    {
        return Err(ParseError::usage(commands::find::MESSAGE_USAGE));
    }
    let tags = util::parse_tags(raw_tags)?;
    Ok(commands::find::FindCommand::new(tags))
}

fn parse_test(args: &str) -> Result<commands::quiz::TestCommand, ParseError> {
    let map = tokenize(args);
    let usage = || ParseError::usage(commands::quiz::MESSAGE_USAGE);
    if map.has_repeated(&[PREFIX_ANSWER]) || map.has_unexpected(&[PREFIX_ANSWER]) {
        return Err(usage());
    }
    let index = parse_index(map.preamble()).map_err(|_| usage())?;
    let attempt = map.value(PREFIX_ANSWER).ok_or_else(usage)?;
    Ok(commands::quiz::TestCommand::new(
        index,
        util::parse_answer(attempt)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_shows_help_usage() {
        assert_eq!(
            parse_command("   "),
            Err(ParseError::usage(commands::help::MESSAGE_USAGE))
        );
    }

    #[test]
    fn unknown_word() {
        assert_eq!(parse_command("fly q/x"), Err(ParseError::UnknownCommand));
        assert_eq!(parse_command("ADD q/x a/y"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn argument_free_commands() {
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("  clear  "), Ok(Command::Clear));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("exit now"), Ok(Command::Exit));
    }

    #[test]
    fn delete_and_open_take_an_index() {
        let index = Index::from_one_based(2).unwrap();
        assert_eq!(
            parse_command("delete 2"),
            Ok(Command::Delete(commands::delete::DeleteCommand::new(index)))
        );
        assert_eq!(
            parse_command("open 2"),
            Ok(Command::Open(commands::open::OpenCommand::new(index)))
        );
        assert_eq!(
            parse_command("delete zero"),
            Err(ParseError::usage(commands::delete::MESSAGE_USAGE))
        );
        assert_eq!(
            parse_command("open"),
            Err(ParseError::usage(commands::open::MESSAGE_USAGE))
        );
    }

    #[test]
    fn find_needs_tags() {
        assert_eq!(
            parse_command("find"),
            Err(ParseError::usage(commands::find::MESSAGE_USAGE))
        );
        assert_eq!(
            parse_command("find t/bad tag"),
            Err(ParseError::Validation(ValidationError::Tag))
        );
        assert!(matches!(parse_command("find t/math t/cs"), Ok(Command::Find(_))));
    }

    #[test]
    fn test_needs_index_and_answer() {
        assert!(matches!(parse_command("test 1 a/4"), Ok(Command::Test(_))));
        assert_eq!(
            parse_command("test a/4"),
            Err(ParseError::usage(commands::quiz::MESSAGE_USAGE))
        );
        assert_eq!(
            parse_command("test 1"),
            Err(ParseError::usage(commands::quiz::MESSAGE_USAGE))
        );
        assert_eq!(
            parse_command("test 1 a/ "),
            Err(ParseError::Validation(ValidationError::Answer))
        );
    }

    #[test]
    fn foreign_prefixes_are_usage_errors() {
        let test_usage = Err(ParseError::usage(commands::quiz::MESSAGE_USAGE));
        assert_eq!(parse_command("test 1 a/4 t/math"), test_usage);
        assert_eq!(parse_command("test 1 a/4 c/5"), test_usage);
        assert_eq!(parse_command("test 1 q/Why a/4"), test_usage);
        assert_eq!(parse_command("test 1 a/4 a/5"), test_usage);
        assert_eq!(
            parse_command("find t/math a/4"),
            Err(ParseError::usage(commands::find::MESSAGE_USAGE))
        );
        assert_eq!(
            parse_command("edit 1 a/Saturn c/Mars"),
            Err(ParseError::usage(commands::edit::MESSAGE_USAGE))
        );
    }
}
