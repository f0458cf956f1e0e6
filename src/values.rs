use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validators;

/// Rejected raw input for one field of a flashcard.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Questions can take any values, and it should not be blank")]
    Question,
    #[error("Answers can take any values, and it should not be blank")]
    Answer,
    #[error("Choices can take any values, and they should not be blank")]
    Choice,
    #[error("Tags names should be alphanumeric")]
    Tag,
    #[error("Index is not a non-zero unsigned integer.")]
    Index,
    #[error("A multiple choice question needs at least two distinct choices")]
    TooFewChoices,
}

/// Expected answer of a flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Answer(String);

impl Answer {
    /// Trim and validate `raw`.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !validators::is_valid_answer(trimmed) {
            return Err(ValidationError::Answer);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Alphanumeric label used to group flashcards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !validators::is_valid_tag_name(trimmed) {
            return Err(ValidationError::Tag);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One selectable option of a multiple choice question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Choice(String);

impl Choice {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !validators::is_valid_choice(trimmed) {
            return Err(ValidationError::Choice);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// View this choice as the answer it stands for when selected.
    pub fn to_answer(&self) -> Answer {
        // Both fields share one validation rule, so a valid choice is a valid answer.
        Answer(self.0.clone())
    }
}

/// Position in a list as shown to the user (1-based), stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Fails for `0`, which has no 1-based meaning.
    pub fn from_one_based(one_based: usize) -> Result<Self, ValidationError> {
        if one_based == 0 {
            return Err(ValidationError::Index);
        }
        Ok(Self {
            zero_based: one_based - 1,
        })
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl FromStr for Index {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if !validators::is_valid_index(trimmed) {
            return Err(ValidationError::Index);
        }
        let value: usize = trimmed.parse().map_err(|_| ValidationError::Index)?;
        Self::from_one_based(value)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

macro_rules! text_value_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                $ty::new(raw)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                $ty::new(&raw)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.0
            }
        }
    };
}

text_value_impls!(Answer);
text_value_impls!(Tag);
text_value_impls!(Choice);
