#![forbid(unsafe_code)]

pub mod deck_service;
pub mod editor_service;
pub mod error;

pub use deck_service::DeckService;
pub use editor_service::{DeckEditorService, SyncReport, apply_sync_report};
pub use error::{CardFailure, DeckServiceError, DeleteError, SaveError};
