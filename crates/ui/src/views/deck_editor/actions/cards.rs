use dioxus::prelude::*;

use super::super::state::{EditorState, SaveState};
use super::intent::EditorIntent;

/// Edits that need no remote call.
pub(super) fn build_edit_action(state: EditorState) -> Callback<EditorIntent> {
    use_callback(move |intent: EditorIntent| {
        let EditorState {
            mut editor,
            mut save_state,
            mut notice,
            ..
        } = state;

        match intent {
            EditorIntent::SetTitle(text) => editor.write().set_title(text),
            EditorIntent::EditFront(text) => editor.write().edit_front(text),
            EditorIntent::EditBack(text) => editor.write().edit_back(text),
            EditorIntent::Flip => {
                editor.write().flip();
                return;
            }
            EditorIntent::Prev => {
                editor.write().prev();
                return;
            }
            EditorIntent::Next => {
                editor.write().next();
                return;
            }
            EditorIntent::AddCard => editor.write().add_card(),
            EditorIntent::RequestDelete
            | EditorIntent::CancelDelete
            | EditorIntent::ConfirmDelete
            | EditorIntent::Save => return,
        }

        // Typing after a failed or finished save starts over.
        if save_state() != SaveState::Idle {
            save_state.set(SaveState::Idle);
        }
        if notice.read().is_some() {
            notice.set(None);
        }
    })
}
