use deck_core::CardCursor;
use deck_core::model::DeckId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::build_study_card;

/// Read-only flip-through of a saved deck.
#[component]
pub fn StudyView(deck_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let deck_service = ctx.deck_service();
    let deck_id = DeckId::new(deck_id);
    let mut cursor = use_signal(CardCursor::start);

    let resource = use_resource(move || {
        let deck_service = deck_service.clone();
        async move {
            deck_service
                .list_cards(deck_id)
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page study-page",
            header { class: "view-header",
                h2 { class: "view-title", "Study" }
                Link { class: "btn btn-ghost", to: Route::Home {}, "Back to decks" }
            }
            div { class: "view-divider" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(cards) => {
                    let len = cards.len();
                    match build_study_card(&cards, cursor()) {
                        None => rsx! {
                            p { class: "empty", "This deck has no cards yet." }
                        },
                        Some(card) => rsx! {
                            div { class: "card-nav",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: !card.can_prev,
                                    onclick: move |_| {
                                        cursor.write().prev();
                                    },
                                    "Previous"
                                }
                                span { class: "card-position", "{card.position_label}" }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: !card.can_next,
                                    onclick: move |_| {
                                        cursor.write().next(len);
                                    },
                                    "Next"
                                }
                            }
                            button {
                                class: "card-preview card-preview--study",
                                r#type: "button",
                                title: "Flip card",
                                onclick: move |_| cursor.write().flip(),
                                span { class: "card-preview-face", "{card.face_label}" }
                                span { class: "card-preview-text", "{card.text}" }
                            }
                        },
                    }
                }
            }
        }
    }
}
