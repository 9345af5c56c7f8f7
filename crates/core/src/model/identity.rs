use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::SubjectId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OwnerError {
    #[error("owner name cannot be empty")]
    Empty,
}

/// Username the remote store files decks and cards under.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Validate and wrap a username. Surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Returns `OwnerError::Empty` if nothing remains after trimming.
    pub fn parse(raw: &str) -> Result<Self, OwnerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OwnerError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner({})", self.0)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The acting user and the subject new decks are created under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub owner: Owner,
    pub subject_id: SubjectId,
}

impl Identity {
    #[must_use]
    pub fn new(owner: Owner, subject_id: SubjectId) -> Self {
        Self { owner, subject_id }
    }
}
