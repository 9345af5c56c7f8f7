use std::sync::Arc;

use deck_core::model::Identity;
use deck_core::{DeckEditor, EditTarget};
use dioxus::prelude::*;
use services::DeckEditorService;

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Success,
    Error(ViewError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    Deleting,
    Error(ViewError),
}

#[derive(Clone)]
pub struct EditorServices {
    pub editor_service: Arc<DeckEditorService>,
    pub identity: Identity,
}

/// Signals backing one open editor dialog.
#[derive(Clone, Copy)]
pub struct EditorState {
    pub editor: Signal<DeckEditor>,
    pub save_state: Signal<SaveState>,
    pub delete_state: Signal<DeleteState>,
    /// The single notice line: validation and remote failures.
    pub notice: Signal<Option<String>>,
}

impl EditorState {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        *self.save_state.read() == SaveState::Saving
            || *self.delete_state.read() == DeleteState::Deleting
    }
}

/// Seeds the editor from `target` once, when the dialog mounts.
pub fn use_editor_state(target: Option<EditTarget>) -> EditorState {
    let editor = use_signal(move || DeckEditor::opened(target));
    let save_state = use_signal(|| SaveState::Idle);
    let delete_state = use_signal(|| DeleteState::Idle);
    let notice = use_signal(|| None::<String>);

    EditorState {
        editor,
        save_state,
        delete_state,
        notice,
    }
}
