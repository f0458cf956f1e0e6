//! In-memory flashcard collection and the model interface commands run against.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::info;

use crate::flashcard::Flashcard;
use crate::values::Tag;

/// Violations of the collection's own invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("flashcard already exists in the collection")]
    Duplicate,
    #[error("flashcard is not in the collection")]
    NotFound,
}

/// Insertion-ordered list of flashcards that never holds two equal cards.
#[derive(Debug, Clone, Default)]
pub struct QuickCache {
    flashcards: Vec<Flashcard>,
}

impl QuickCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, rejecting duplicates.
    pub fn from_flashcards(flashcards: Vec<Flashcard>) -> Result<Self, ModelError> {
        let mut cache = Self::new();
        for card in flashcards {
            cache.add(card)?;
        }
        Ok(cache)
    }

    pub fn contains(&self, flashcard: &Flashcard) -> bool {
        self.flashcards.iter().any(|c| c == flashcard)
    }

    pub fn add(&mut self, flashcard: Flashcard) -> Result<(), ModelError> {
        if self.contains(&flashcard) {
            return Err(ModelError::Duplicate);
        }
        self.flashcards.push(flashcard);
        Ok(())
    }

    pub fn remove(&mut self, flashcard: &Flashcard) -> Result<Flashcard, ModelError> {
        let pos = self.position(flashcard)?;
        Ok(self.flashcards.remove(pos))
    }

    /// Replace `target` in place with `edited`.
    ///
    /// `edited` may equal `target` (e.g. only the tags changed) but must not
    /// equal any other card.
    pub fn set(&mut self, target: &Flashcard, edited: Flashcard) -> Result<(), ModelError> {
        let pos = self.position(target)?;
        if target != &edited && self.contains(&edited) {
            return Err(ModelError::Duplicate);
        }
        self.flashcards[pos] = edited;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.flashcards.clear();
    }

    pub fn as_slice(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    fn position(&self, flashcard: &Flashcard) -> Result<usize, ModelError> {
        self.flashcards
            .iter()
            .position(|c| c == flashcard)
            .ok_or(ModelError::NotFound)
    }
}

/// Which flashcards are currently shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlashcardFilter {
    #[default]
    All,
    /// Cards carrying every one of these tags.
    Tags(BTreeSet<Tag>),
}

impl FlashcardFilter {
    pub fn matches(&self, flashcard: &Flashcard) -> bool {
        match self {
            FlashcardFilter::All => true,
            FlashcardFilter::Tags(tags) => tags.iter().all(|t| flashcard.has_tag(t)),
        }
    }
}

/// Operations commands may perform on the flashcard collection.
pub trait Model {
    fn has_flashcard(&self, flashcard: &Flashcard) -> bool;
    fn add_flashcard(&mut self, flashcard: Flashcard) -> Result<(), ModelError>;
    fn delete_flashcard(&mut self, target: &Flashcard) -> Result<Flashcard, ModelError>;
    fn set_flashcard(&mut self, target: &Flashcard, edited: Flashcard) -> Result<(), ModelError>;
    fn clear(&mut self);
    fn quick_cache(&self) -> &QuickCache;
    /// Cards in display order, after the current filter is applied.
    fn filtered_flashcards(&self) -> Vec<&Flashcard>;
    fn update_filter(&mut self, filter: FlashcardFilter);
}

/// Default [`Model`]: a [`QuickCache`] plus the active display filter.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    quick_cache: QuickCache,
    filter: FlashcardFilter,
}

impl ModelManager {
    pub fn new(quick_cache: QuickCache) -> Self {
        Self {
            quick_cache,
            filter: FlashcardFilter::All,
        }
    }
}

impl Model for ModelManager {
    fn has_flashcard(&self, flashcard: &Flashcard) -> bool {
        self.quick_cache.contains(flashcard)
    }

    fn add_flashcard(&mut self, flashcard: Flashcard) -> Result<(), ModelError> {
        self.quick_cache.add(flashcard)?;
        // New cards are always visible right after being added.
        self.filter = FlashcardFilter::All;
        info!(size = self.quick_cache.len(), "flashcard added");
        Ok(())
    }

    fn delete_flashcard(&mut self, target: &Flashcard) -> Result<Flashcard, ModelError> {
        let removed = self.quick_cache.remove(target)?;
        info!(size = self.quick_cache.len(), "flashcard deleted");
        Ok(removed)
    }

    fn set_flashcard(&mut self, target: &Flashcard, edited: Flashcard) -> Result<(), ModelError> {
        self.quick_cache.set(target, edited)?;
        info!("flashcard replaced");
        Ok(())
    }

    fn clear(&mut self) {
        self.quick_cache.clear();
        info!("collection cleared");
    }

    fn quick_cache(&self) -> &QuickCache {
        &self.quick_cache
    }

    fn filtered_flashcards(&self) -> Vec<&Flashcard> {
        self.quick_cache
            .as_slice()
            .iter()
            .filter(|c| self.filter.matches(c))
            .collect()
    }

    fn update_filter(&mut self, filter: FlashcardFilter) {
        self.filter = filter;
    }
}
