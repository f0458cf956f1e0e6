use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::question::Question;
use crate::values::{Answer, Tag};

/// A question, its expected answer and the tags it is filed under.
///
/// Identity is the rendered question plus the answer; tags never take part in
/// duplicate detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    question: Question,
    answer: Answer,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Flashcard {
    pub fn new(question: Question, answer: Answer, tags: BTreeSet<Tag>) -> Self {
        Self {
            question,
            answer,
            tags,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.question == other.question && self.answer == other.answer
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.question.hash(state);
        self.answer.hash(state);
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question: {}", self.question.render().trim_end())?;
        write!(f, "; Answer: {}", self.answer)?;
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(|t| format!("[{}]", t)).collect();
            write!(f, "; Tags: {}", tags.join(""))?;
        }
        Ok(())
    }
}
