//! Question variants a flashcard can carry.
//!
//! [`Question`] is a closed set: every site that renders or resolves a
//! question matches on it exhaustively, so a new kind of question is a
//! compile error everywhere it is not yet handled.

use std::collections::HashSet;
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};

use crate::validators;
use crate::values::{Answer, Choice, Index, ValidationError};

/// Free-text question with no enumerated options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenEndedQuestion {
    #[serde(deserialize_with = "deserialize_question_text")]
    text: String,
}

impl OpenEndedQuestion {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            text: question_text(raw)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Multiple choice question; choices keep their input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "McqRecord")]
pub struct Mcq {
    text: String,
    choices: Vec<Choice>,
}

impl Mcq {
    /// Requires at least two distinct choices.
    pub fn new(raw: &str, choices: Vec<Choice>) -> Result<Self, ValidationError> {
        let text = question_text(raw)?;
        let distinct: HashSet<&str> = choices.iter().map(Choice::as_str).collect();
        if distinct.len() < 2 {
            return Err(ValidationError::TooFewChoices);
        }
        Ok(Self { text, choices })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Answer selected by choosing `index`.
    ///
    /// # Panics
    ///
    /// When `index` is past the last choice. Callers range-check indices with
    /// [`Mcq::contains_index`] while parsing.
    pub fn resolve_option(&self, index: Index) -> Answer {
        self.choices[index.zero_based()].to_answer()
    }

    pub fn contains_index(&self, index: Index) -> bool {
        index.zero_based() < self.choices.len()
    }

    /// Same choices under a new stem.
    pub fn with_stem(&self, stem: &OpenEndedQuestion) -> Self {
        Self {
            text: stem.text.clone(),
            choices: self.choices.clone(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        writeln!(&mut out, "{}", self.text).ok();
        for (i, choice) in self.choices.iter().enumerate() {
            writeln!(&mut out, "{}. {}", i + 1, choice).ok();
        }
        out
    }
}

#[derive(Deserialize)]
struct McqRecord {
    text: String,
    choices: Vec<Choice>,
}

impl TryFrom<McqRecord> for Mcq {
    type Error = ValidationError;

    fn try_from(record: McqRecord) -> Result<Self, Self::Error> {
        Mcq::new(&record.text, record.choices)
    }
}

/// The question side of a flashcard.
///
/// Two questions are equal when they are the same variant and render to the
/// same text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    OpenEnded(OpenEndedQuestion),
    Mcq(Mcq),
}

impl Question {
    /// Display form: the open-ended text as is, or the MCQ stem followed by
    /// one numbered line per choice.
    pub fn render(&self) -> String {
        match self {
            Question::OpenEnded(q) => q.text.clone(),
            Question::Mcq(q) => q.render(),
        }
    }

    /// Stem text without any choices.
    pub fn text(&self) -> &str {
        match self {
            Question::OpenEnded(q) => q.text(),
            Question::Mcq(q) => q.text(),
        }
    }

    pub fn as_mcq(&self) -> Option<&Mcq> {
        match self {
            Question::OpenEnded(_) => None,
            Question::Mcq(q) => Some(q),
        }
    }
}

impl From<OpenEndedQuestion> for Question {
    fn from(q: OpenEndedQuestion) -> Self {
        Question::OpenEnded(q)
    }
}

impl From<Mcq> for Question {
    fn from(q: Mcq) -> Self {
        Question::Mcq(q)
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other) && self.render() == other.render()
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        self.render().hash(state);
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn question_text(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if !validators::is_valid_question(trimmed) {
        return Err(ValidationError::Question);
    }
    Ok(trimmed.to_string())
}

fn deserialize_question_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    question_text(&raw).map_err(serde::de::Error::custom)
}
