use std::sync::Arc;

use dioxus::prelude::*;
use services::DeleteError;

use crate::views::ViewError;

use super::super::state::{DeleteState, EditorServices, EditorState};

pub(super) fn build_request_delete_action(state: EditorState) -> Callback<()> {
    use_callback(move |()| {
        let EditorState {
            mut editor,
            mut delete_state,
            mut notice,
            ..
        } = state;
        let requested = editor.write().request_delete();
        match requested {
            Ok(_) => {
                delete_state.set(DeleteState::Idle);
                notice.set(None);
            }
            Err(err) => notice.set(Some(DeleteError::from(err).user_message())),
        }
    })
}

pub(super) fn build_cancel_delete_action(state: EditorState) -> Callback<()> {
    use_callback(move |()| {
        let mut editor = state.editor;
        editor.write().cancel_delete();
    })
}

/// The card leaves the editor only once the store has confirmed the delete.
pub(super) fn build_confirm_delete_action(
    state: EditorState,
    services: &EditorServices,
) -> Callback<()> {
    let editor_service = Arc::clone(&services.editor_service);
    use_callback(move |()| {
        let EditorState {
            mut editor,
            mut delete_state,
            mut notice,
            ..
        } = state;

        let confirmed = editor.write().confirm_delete();
        let id = match confirmed {
            Ok(id) => id,
            Err(err) => {
                notice.set(Some(DeleteError::from(err).user_message()));
                return;
            }
        };

        delete_state.set(DeleteState::Deleting);
        let editor_service = Arc::clone(&editor_service);
        spawn(async move {
            match editor_service.delete_card(id).await {
                Ok(()) => {
                    editor.write().apply_delete(id);
                    delete_state.set(DeleteState::Idle);
                    notice.set(None);
                }
                Err(err) => {
                    delete_state.set(DeleteState::Error(ViewError::Unknown));
                    notice.set(Some(err.user_message()));
                }
            }
        });
    })
}
