use thiserror::Error;

use crate::editor::EditorError;
use crate::model::{DeckError, OwnerError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Owner(#[from] OwnerError),
    #[error(transparent)]
    Editor(#[from] EditorError),
}
