use thiserror::Error;

use crate::model::ids::{DeckId, SubjectId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck title cannot be empty")]
    EmptyTitle,
}

//
// ─── TITLE ─────────────────────────────────────────────────────────────────────
//

/// A deck title that is known to contain more than whitespace.
///
/// The text is kept exactly as typed; trimming is only used for the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckTitle(String);

impl DeckTitle {
    /// Validate a raw title.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyTitle` if the title is empty after trimming.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DeckError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DeckError::EmptyTitle);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A deck as the remote store knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: DeckId,
    subject_id: SubjectId,
    title: String,
}

impl Deck {
    #[must_use]
    pub fn new(id: DeckId, subject_id: SubjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            subject_id,
            title: title.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns a copy carrying a new title.
    #[must_use]
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
