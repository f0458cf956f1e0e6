//! Field-level predicates shared by the value objects.
//!
//! Every predicate is pure: it looks at an already-trimmed string and answers
//! whether it is a legal value for the field. Building the value (and picking
//! the error message) is left to the value objects themselves.

use std::sync::LazyLock;

use regex::Regex;

/// Non-empty, first character is not whitespace. Anything may follow, newlines included.
static TEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^[^\s].*$").expect("text pattern compiles"));

/// ASCII letters and digits only.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]]+$").expect("tag pattern compiles"));

/// Positive decimal integer without sign or leading zeros.
static INDEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").expect("index pattern compiles"));

/// Question text (open-ended or MCQ stem).
pub fn is_valid_question(test: &str) -> bool {
    TEXT_PATTERN.is_match(test)
}

/// Expected answer text.
pub fn is_valid_answer(test: &str) -> bool {
    TEXT_PATTERN.is_match(test)
}

/// A single MCQ choice.
pub fn is_valid_choice(test: &str) -> bool {
    TEXT_PATTERN.is_match(test)
}

pub fn is_valid_tag_name(test: &str) -> bool {
    TAG_PATTERN.is_match(test)
}

/// One-based index; also rejects values that would overflow `usize`.
pub fn is_valid_index(test: &str) -> bool {
    INDEX_PATTERN.is_match(test) && test.parse::<usize>().is_ok()
}
