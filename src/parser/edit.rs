use crate::commands::edit::{EditCommand, EditFlashcardDescriptor, MESSAGE_USAGE};

use super::ParseError;
use super::tokenizer::{PREFIX_ANSWER, PREFIX_QUESTION, PREFIX_TAG, tokenize};
use super::util;

/// Parse the arguments of `edit`: an index followed by the fields to replace.
///
/// A lone empty `t/` clears every tag.
pub fn parse(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(args);
    if map.has_repeated(&[PREFIX_QUESTION, PREFIX_ANSWER])
        || map.has_unexpected(&[PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_TAG])
    {
        return Err(ParseError::usage(MESSAGE_USAGE));
    }
    let index =
        util::parse_index(map.preamble()).map_err(|_| ParseError::usage(MESSAGE_USAGE))?;

    let mut descriptor = EditFlashcardDescriptor::default();
    if let Some(question) = map.value(PREFIX_QUESTION) {
        descriptor.question = Some(util::parse_question(question)?);
    }
    if let Some(answer) = map.value(PREFIX_ANSWER) {
        descriptor.answer = Some(util::parse_answer(answer)?);
    }
    descriptor.tags = match map.all_values(PREFIX_TAG) {
        [] => None,
        [only] if only.is_empty() => Some(Default::default()),
        raw => Some(util::parse_tags(raw)?),
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldsToEdit);
    }
    Ok(EditCommand::new(index, descriptor))
}
