pub(crate) mod deck_editor;
mod home;
mod state;
mod study;

pub use deck_editor::DeckEditorModal;
pub use home::HomeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use study::StudyView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
