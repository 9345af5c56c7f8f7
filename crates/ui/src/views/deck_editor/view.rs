use deck_core::EditTarget;
use deck_core::model::DeckId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::build_editor_vm;

use super::actions::{EditorIntent, use_editor_dispatcher};
use super::state::{DeleteState, EditorServices, use_editor_state};

/// Modal dialog for creating a deck (`target: None`) or editing one.
#[component]
pub fn DeckEditorModal(
    target: Option<EditTarget>,
    on_saved: EventHandler<DeckId>,
    on_close: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let services = EditorServices {
        editor_service: ctx.editor_service(),
        identity: ctx.identity(),
    };
    let state = use_editor_state(target);
    let dispatcher = use_editor_dispatcher(&state, &services, on_saved);
    let dispatch = dispatcher.dispatch;

    let vm = build_editor_vm(
        &state.editor.read(),
        (state.save_state)(),
        (state.delete_state)(),
    );
    let notice = (state.notice)();
    let deleting = (state.delete_state)() == DeleteState::Deleting;
    let preview_class = if vm.is_flipped {
        "card-preview card-preview--back"
    } else {
        "card-preview"
    };
    let face_class = if vm.face_is_placeholder {
        "card-preview-text card-preview-text--empty"
    } else {
        "card-preview-text"
    };

    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal deck-editor",
                role: "dialog",
                aria_modal: "true",
                tabindex: "0",
                onkeydown: dispatcher.on_key,

                header { class: "modal-header",
                    h2 { "{vm.heading}" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        disabled: vm.is_busy,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }

                label { class: "field",
                    span { class: "field-label", "Deck title" }
                    input {
                        id: "deck-title",
                        r#type: "text",
                        placeholder: "e.g. World capitals",
                        value: "{vm.title}",
                        oninput: move |evt: FormEvent| dispatch.call(EditorIntent::SetTitle(evt.value())),
                    }
                }

                div { class: "card-nav",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: !vm.can_prev,
                        onclick: move |_| dispatch.call(EditorIntent::Prev),
                        "Previous"
                    }
                    span { class: "card-position", "{vm.position_label}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: !vm.can_next,
                        onclick: move |_| dispatch.call(EditorIntent::Next),
                        "Next"
                    }
                }

                button {
                    class: preview_class,
                    r#type: "button",
                    title: "Flip card",
                    onclick: move |_| dispatch.call(EditorIntent::Flip),
                    span { class: "card-preview-face", "{vm.face_label}" }
                    span { class: face_class, "{vm.face_text}" }
                    if !vm.card_is_saved {
                        span { class: "chip", "Unsaved" }
                    }
                }

                label { class: "field",
                    span { class: "field-label", "Front" }
                    textarea {
                        id: "card-front",
                        rows: "3",
                        value: "{vm.front}",
                        oninput: move |evt: FormEvent| dispatch.call(EditorIntent::EditFront(evt.value())),
                    }
                }
                label { class: "field",
                    span { class: "field-label", "Back" }
                    textarea {
                        id: "card-back",
                        rows: "3",
                        value: "{vm.back}",
                        oninput: move |evt: FormEvent| dispatch.call(EditorIntent::EditBack(evt.value())),
                    }
                }

                if let Some(message) = notice {
                    p { class: "notice", role: "status", "{message}" }
                }

                footer { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: !vm.can_add,
                        onclick: move |_| dispatch.call(EditorIntent::AddCard),
                        "Add card"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        disabled: !vm.can_delete,
                        onclick: move |_| dispatch.call(EditorIntent::RequestDelete),
                        "Delete card"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: vm.is_busy,
                        onclick: move |_| dispatch.call(EditorIntent::Save),
                        "{vm.save_label}"
                    }
                }

                if vm.confirm_delete_open {
                    DeleteConfirm {
                        deleting,
                        on_cancel: move |()| dispatch.call(EditorIntent::CancelDelete),
                        on_confirm: move |()| dispatch.call(EditorIntent::ConfirmDelete),
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteConfirm(
    deleting: bool,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "confirm", role: "alertdialog",
            p { "Delete this card? This cannot be undone." }
            div { class: "confirm-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: deleting,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: deleting,
                    onclick: move |_| on_confirm.call(()),
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
