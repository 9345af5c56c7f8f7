use dioxus::prelude::*;

use super::super::state::EditorState;
use super::intent::EditorIntent;

/// Ctrl/Cmd+Enter saves; Escape backs out of a pending delete.
pub(super) fn build_on_key_action(
    state: EditorState,
    dispatch: Callback<EditorIntent>,
) -> Callback<KeyboardEvent> {
    use_callback(move |evt: KeyboardEvent| {
        let modifiers = evt.data.modifiers();
        let primary = modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META);

        if primary && evt.data.key() == Key::Enter {
            evt.prevent_default();
            dispatch.call(EditorIntent::Save);
            return;
        }

        if evt.data.key() == Key::Escape && state.editor.read().pending_delete().is_some() {
            evt.prevent_default();
            dispatch.call(EditorIntent::CancelDelete);
        }
    })
}
