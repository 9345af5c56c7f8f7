#![forbid(unsafe_code)]

pub mod cursor;
pub mod editor;
pub mod error;
pub mod model;

pub use cursor::CardCursor;
pub use editor::{DeckEditor, EditTarget, EditorError, EditorMode};
pub use error::Error;
