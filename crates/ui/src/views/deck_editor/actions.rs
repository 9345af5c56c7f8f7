mod cards;
mod delete;
mod intent;
mod keyboard;
mod save;

use deck_core::model::DeckId;
use dioxus::prelude::*;

use super::state::{EditorServices, EditorState};

pub use intent::EditorIntent;

#[derive(Clone, Copy)]
pub struct EditorDispatcher {
    pub dispatch: Callback<EditorIntent>,
    pub on_key: Callback<KeyboardEvent>,
}

#[derive(Clone, Copy)]
struct EditorActionHandlers {
    edit: Callback<EditorIntent>,
    request_delete: Callback<()>,
    cancel_delete: Callback<()>,
    confirm_delete: Callback<()>,
    save: Callback<()>,
}

pub fn use_editor_dispatcher(
    state: &EditorState,
    services: &EditorServices,
    on_saved: Callback<DeckId>,
) -> EditorDispatcher {
    let state = *state;

    let edit_action = cards::build_edit_action(state);
    let request_delete_action = delete::build_request_delete_action(state);
    let cancel_delete_action = delete::build_cancel_delete_action(state);
    let confirm_delete_action = delete::build_confirm_delete_action(state, services);
    let save_action = save::build_save_action(state, services, on_saved);

    let handlers = EditorActionHandlers {
        edit: edit_action,
        request_delete: request_delete_action,
        cancel_delete: cancel_delete_action,
        confirm_delete: confirm_delete_action,
        save: save_action,
    };

    let dispatch = use_callback(move |intent: EditorIntent| {
        // Nothing changes while a save or delete is in flight.
        if state.is_busy() {
            log::debug!("ignoring {intent:?} while busy");
            return;
        }
        dispatch_intent(intent, &handlers);
    });

    let on_key = keyboard::build_on_key_action(state, dispatch);

    EditorDispatcher { dispatch, on_key }
}

fn dispatch_intent(intent: EditorIntent, handlers: &EditorActionHandlers) {
    match intent {
        EditorIntent::RequestDelete => handlers.request_delete.call(()),
        EditorIntent::CancelDelete => handlers.cancel_delete.call(()),
        EditorIntent::ConfirmDelete => handlers.confirm_delete.call(()),
        EditorIntent::Save => handlers.save.call(()),
        other => handlers.edit.call(other),
    }
}
