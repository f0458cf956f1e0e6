use tracing::debug;

use crate::commands::add::{AddCommand, MCQ_USAGE, OPEN_ENDED_USAGE};
use crate::flashcard::Flashcard;
use crate::question::{Mcq, Question};
use crate::values::{Answer, Index, ValidationError};

use super::ParseError;
use super::tokenizer::{
    ArgumentMultimap, PREFIX_ANSWER, PREFIX_CHOICE, PREFIX_QUESTION, PREFIX_TAG, tokenize,
};
use super::util;

/// Parse the arguments of `add`.
///
/// Any `c/` turns the card into a multiple choice question; otherwise it is
/// open-ended and needs an `a/`.
pub fn parse(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(args);
    let usage = if map.contains(PREFIX_CHOICE) {
        MCQ_USAGE
    } else {
        OPEN_ENDED_USAGE
    };
    if !map.preamble().is_empty() || map.has_repeated(&[PREFIX_QUESTION, PREFIX_ANSWER]) {
        return Err(ParseError::usage(usage));
    }
    let Some(question) = map.value(PREFIX_QUESTION) else {
        return Err(ParseError::usage(usage));
    };
    let tags = util::parse_tags(map.all_values(PREFIX_TAG))?;

    let flashcard = if map.contains(PREFIX_CHOICE) {
        let (question, answer) = parse_mcq(question, &map)?;
        Flashcard::new(question, answer, tags)
    } else {
        let answer = map
            .value(PREFIX_ANSWER)
            .ok_or(ParseError::usage(OPEN_ENDED_USAGE))?;
        Flashcard::new(
            util::parse_question(question)?.into(),
            util::parse_answer(answer)?,
            tags,
        )
    };
    debug!(flashcard = %flashcard, "parsed add command");
    Ok(AddCommand::new(flashcard))
}

fn parse_mcq(
    question: &str,
    map: &ArgumentMultimap,
) -> Result<(Question, Answer), ParseError> {
    let choices = util::parse_choices(map.all_values(PREFIX_CHOICE))?;
    let mcq = Mcq::new(question, choices).map_err(|err| match err {
        ValidationError::TooFewChoices => ParseError::usage(MCQ_USAGE),
        other => ParseError::Validation(other),
    })?;
    let answer = match map.value(PREFIX_ANSWER) {
        Some(raw) => util::parse_choice_answer(raw, &mcq)?,
        None => mcq.resolve_option(Index::from_zero_based(0)),
    };
    Ok((mcq.into(), answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Tag;

    fn parse_card(args: &str) -> Flashcard {
        parse(args).unwrap().flashcard().clone()
    }

    #[test]
    fn open_ended_with_tag() {
        let card = parse_card(" q/What is 2+2? a/4 t/math");
        assert!(card.question().as_mcq().is_none());
        assert_eq!(card.question().render(), "What is 2+2?");
        assert_eq!(card.answer(), &Answer::new("4").unwrap());
        assert!(card.has_tag(&Tag::new("math").unwrap()));
        assert_eq!(card.tags().len(), 1);
    }

    #[test]
    fn mcq_without_answer_defaults_to_first_choice() {
        let card = parse_card(" q/Pick a color c/Red c/Blue");
        assert_eq!(card.question().render(), "Pick a color\n1. Red\n2. Blue\n");
        assert_eq!(card.answer(), &Answer::new("Red").unwrap());
    }

    #[test]
    fn mcq_answer_is_choice_index() {
        let card = parse_card(" q/Pick a color a/2 c/Red c/Blue");
        assert_eq!(card.answer(), &Answer::new("Blue").unwrap());
        assert!(matches!(
            parse(" q/Pick a/3 c/Red c/Blue"),
            Err(ParseError::ChoiceOutOfRange { count: 2, .. })
        ));
        assert_eq!(
            parse(" q/Pick a/Red c/Red c/Blue").unwrap_err(),
            ParseError::Validation(ValidationError::Index)
        );
    }

    #[test]
    fn single_choice_is_a_usage_error() {
        assert_eq!(
            parse(" q/Pick a color c/Red").unwrap_err(),
            ParseError::usage(MCQ_USAGE)
        );
        assert_eq!(
            parse(" q/Pick a color c/Red c/Red").unwrap_err(),
            ParseError::usage(MCQ_USAGE)
        );
    }

    #[test]
    fn missing_fields_are_usage_errors() {
        assert_eq!(parse(" a/4").unwrap_err(), ParseError::usage(OPEN_ENDED_USAGE));
        assert_eq!(parse(" q/Q").unwrap_err(), ParseError::usage(OPEN_ENDED_USAGE));
        assert_eq!(parse(" c/a c/b").unwrap_err(), ParseError::usage(MCQ_USAGE));
        assert_eq!(parse("").unwrap_err(), ParseError::usage(OPEN_ENDED_USAGE));
    }

    #[test]
    fn preamble_and_repeats_are_usage_errors() {
        assert_eq!(
            parse(" junk q/Q a/A").unwrap_err(),
            ParseError::usage(OPEN_ENDED_USAGE)
        );
        assert_eq!(
            parse(" q/Q q/R a/A").unwrap_err(),
            ParseError::usage(OPEN_ENDED_USAGE)
        );
        assert_eq!(
            parse(" q/Q a/A a/B").unwrap_err(),
            ParseError::usage(OPEN_ENDED_USAGE)
        );
    }

    #[test]
    fn invalid_fields_are_validation_errors() {
        assert_eq!(
            parse(" q/ a/4").unwrap_err(),
            ParseError::Validation(ValidationError::Question)
        );
        assert_eq!(
            parse(" q/Q a/ ").unwrap_err(),
            ParseError::Validation(ValidationError::Answer)
        );
        assert_eq!(
            parse(" q/Q a/A t/not valid").unwrap_err(),
            ParseError::Validation(ValidationError::Tag)
        );
        assert_eq!(
            parse(" q/Q c/ c/b").unwrap_err(),
            ParseError::Validation(ValidationError::Choice)
        );
    }

    #[test]
    fn parsing_is_deterministic() {
        let args = " q/Pick a color c/Red c/Blue t/art";
        assert_eq!(parse_card(args), parse_card(args));
    }
}
