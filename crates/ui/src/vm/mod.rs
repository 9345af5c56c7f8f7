mod deck_vm;
mod editor_vm;
mod study_vm;

pub use deck_vm::{DeckRowVm, map_deck_rows};
pub use editor_vm::{EditorVm, build_editor_vm};
pub use study_vm::{StudyCardVm, build_study_card};
