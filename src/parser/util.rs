//! Field parsers shared by the per-command parsers.

use std::collections::BTreeSet;

use crate::question::{Mcq, OpenEndedQuestion};
use crate::values::{Answer, Choice, Index, Tag};

use super::ParseError;

/// Parse a 1-based index, trimming surrounding whitespace.
pub fn parse_index(one_based: &str) -> Result<Index, ParseError> {
    Ok(one_based.parse::<Index>()?)
}

pub fn parse_question(raw: &str) -> Result<OpenEndedQuestion, ParseError> {
    Ok(OpenEndedQuestion::new(raw)?)
}

pub fn parse_answer(raw: &str) -> Result<Answer, ParseError> {
    Ok(Answer::new(raw)?)
}

pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(raw)?)
}

pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Result<BTreeSet<Tag>, ParseError> {
    raw.iter().map(|t| parse_tag(t.as_ref())).collect()
}

/// Validate every choice, keeping input order.
pub fn parse_choices<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Choice>, ParseError> {
    raw.iter()
        .map(|c| Choice::new(c.as_ref()).map_err(ParseError::from))
        .collect()
}

/// Resolve a 1-based choice index against `mcq`, rejecting indices past the last choice.
pub fn parse_choice_answer(raw: &str, mcq: &Mcq) -> Result<Answer, ParseError> {
    let index = parse_index(raw)?;
    if !mcq.contains_index(index) {
        return Err(ParseError::ChoiceOutOfRange {
            index,
            count: mcq.choices().len(),
        });
    }
    Ok(mcq.resolve_option(index))
}
