use std::sync::Arc;

use deck_core::model::DeckId;
use dioxus::prelude::*;
use services::{SaveError, apply_sync_report};

use crate::views::ViewError;

use super::super::state::{EditorServices, EditorState, SaveState};

/// Validate locally, then write the deck and its cards.
///
/// Validation failures only set the notice line; nothing is sent. On success
/// the editor is reset and `on_saved` runs once with the deck id.
pub(super) fn build_save_action(
    state: EditorState,
    services: &EditorServices,
    on_saved: Callback<DeckId>,
) -> Callback<()> {
    let editor_service = Arc::clone(&services.editor_service);
    let identity = services.identity.clone();
    use_callback(move |()| {
        let EditorState {
            mut editor,
            mut save_state,
            mut notice,
            ..
        } = state;

        let prepared = editor.read().prepare_save();
        let plan = match prepared {
            Ok(plan) => plan,
            Err(err) => {
                notice.set(Some(SaveError::from(err).user_message()));
                return;
            }
        };

        save_state.set(SaveState::Saving);
        notice.set(None);
        let editor_service = Arc::clone(&editor_service);
        let identity = identity.clone();
        spawn(async move {
            let outcome = match editor_service.sync(&identity, plan).await {
                Ok(report) => apply_sync_report(&mut editor.write(), report),
                Err(err) => Err(err),
            };
            match outcome {
                Ok(deck_id) => {
                    save_state.set(SaveState::Success);
                    on_saved.call(deck_id);
                }
                Err(err) => {
                    save_state.set(SaveState::Error(ViewError::Unknown));
                    notice.set(Some(err.user_message()));
                }
            }
        });
    })
}
