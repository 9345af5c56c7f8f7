//! Shared error types for the services crate.

use thiserror::Error;

use deck_core::editor::EditorError;
use deck_core::model::{CardId, DeckError, DeckId};
use storage::repository::StorageError;

/// A card write that did not reach the store.
#[derive(Debug)]
pub struct CardFailure {
    /// Position of the card in the editor.
    pub slot: usize,
    /// `None` when the failed write was a create.
    pub card_id: Option<CardId>,
    pub error: StorageError,
}

/// Errors emitted while saving a deck and its cards.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] EditorError),
    #[error("could not save deck: {0}")]
    Deck(#[source] StorageError),
    #[error("{} of {attempted} cards could not be saved", .failed.len())]
    Cards {
        deck_id: DeckId,
        attempted: usize,
        failed: Vec<CardFailure>,
    },
}

impl SaveError {
    /// One line suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(EditorError::Deck(DeckError::EmptyTitle)) => {
                "Please enter a deck title.".to_string()
            }
            Self::Invalid(EditorError::NoValidCards) => {
                "Add at least one card with both a front and a back.".to_string()
            }
            Self::Invalid(other) => other.to_string(),
            Self::Deck(_) => "Failed to save the deck. Please try again.".to_string(),
            Self::Cards {
                attempted, failed, ..
            } => format!(
                "Failed to save {} of {attempted} cards. Please try again.",
                failed.len()
            ),
        }
    }

    /// The save stopped before anything was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Errors emitted while deleting a card from the editor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeleteError {
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DeleteError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Editor(err) => err.to_string(),
            Self::Storage(_) => "Failed to delete the card. Please try again.".to_string(),
        }
    }
}

/// Errors emitted by `DeckService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
