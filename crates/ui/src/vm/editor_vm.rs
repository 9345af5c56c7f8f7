use deck_core::{DeckEditor, EditorMode};

use crate::views::deck_editor::state::{DeleteState, SaveState};

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorVm {
    pub heading: &'static str,
    pub title: String,
    pub front: String,
    pub back: String,
    pub position_label: String,
    pub face_label: &'static str,
    pub face_text: String,
    pub face_is_placeholder: bool,
    pub is_flipped: bool,
    pub card_is_saved: bool,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_delete: bool,
    pub can_add: bool,
    pub is_busy: bool,
    pub save_label: &'static str,
    pub confirm_delete_open: bool,
}

#[must_use]
pub fn build_editor_vm(
    editor: &DeckEditor,
    save_state: SaveState,
    delete_state: DeleteState,
) -> EditorVm {
    let heading = match editor.mode() {
        EditorMode::Create => "New deck",
        EditorMode::Edit(_) => "Edit deck",
    };
    let card = editor.current_card();
    let is_flipped = editor.is_flipped();
    let (face_label, face_raw) = if is_flipped {
        ("Back", card.back.as_str())
    } else {
        ("Front", card.front.as_str())
    };
    let face_is_placeholder = face_raw.trim().is_empty();
    let face_text = if face_is_placeholder {
        placeholder_for(face_label)
    } else {
        face_raw.to_string()
    };

    let is_busy = save_state == SaveState::Saving || delete_state == DeleteState::Deleting;
    let confirm_delete_open =
        editor.pending_delete().is_some() || delete_state == DeleteState::Deleting;
    // The cursor stays put while a delete prompt names the current card.
    let can_move = !is_busy && !confirm_delete_open;

    EditorVm {
        heading,
        title: editor.title().to_string(),
        front: card.front.clone(),
        back: card.back.clone(),
        position_label: format!("Card {} of {}", editor.current_index() + 1, editor.len()),
        face_label,
        face_text,
        face_is_placeholder,
        is_flipped,
        card_is_saved: card.is_persisted(),
        can_prev: editor.has_prev() && can_move,
        can_next: editor.has_next() && can_move,
        can_delete: editor.can_delete() && !is_busy,
        can_add: can_move,
        is_busy,
        save_label: if save_state == SaveState::Saving {
            "Saving..."
        } else {
            "Save"
        },
        confirm_delete_open,
    }
}

fn placeholder_for(face_label: &str) -> String {
    format!("({} is empty)", face_label.to_lowercase())
}
