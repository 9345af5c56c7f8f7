use deck_core::EditTarget;
use deck_core::model::DeckId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{DeckEditorModal, ViewError, ViewState, view_state_from_resource};
use crate::vm::{DeckRowVm, map_deck_rows};

#[derive(Clone, Debug, PartialEq)]
enum EditorSession {
    Closed,
    Loading(DeckId),
    Open(Option<EditTarget>),
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let deck_service = ctx.deck_service();
    let identity = ctx.identity();
    let mut session = use_signal(|| EditorSession::Closed);
    let mut list_notice = use_signal(|| None::<String>);

    let deck_service_for_list = deck_service.clone();
    let resource = use_resource(move || {
        let deck_service = deck_service_for_list.clone();
        let identity = identity.clone();
        async move {
            let decks = deck_service
                .list_decks(&identity)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_deck_rows(&decks))
        }
    });

    let open_existing = use_callback(move |deck_id: DeckId| {
        let deck_service = deck_service.clone();
        session.set(EditorSession::Loading(deck_id));
        list_notice.set(None);
        spawn(async move {
            match deck_service.load_for_editing(deck_id).await {
                Ok(target) => session.set(EditorSession::Open(Some(target))),
                Err(err) => {
                    log::warn!("could not load deck {deck_id}: {err}");
                    session.set(EditorSession::Closed);
                    list_notice.set(Some("Could not open the deck. Please try again.".to_string()));
                }
            }
        });
    });

    let on_saved = use_callback(move |deck_id: DeckId| {
        log::debug!("deck {deck_id} saved, refreshing list");
        session.set(EditorSession::Closed);
        list_notice.set(Some("Deck saved.".to_string()));
        let mut resource = resource;
        resource.restart();
    });

    let state = view_state_from_resource(&resource);
    let current_session = session();
    let loading_id = match current_session {
        EditorSession::Loading(id) => Some(id),
        _ => None,
    };

    rsx! {
        div { class: "page decks-page",
            header { class: "view-header",
                h2 { class: "view-title", "Decks" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        list_notice.set(None);
                        session.set(EditorSession::Open(None));
                    },
                    "New deck"
                }
            }
            div { class: "view-divider" }

            if let Some(message) = list_notice() {
                p { class: "notice", role: "status", "{message}" }
            }

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
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { class: "empty", "No decks yet. Create one to get started." }
                    } else {
                        ul { class: "deck-list",
                            for row in rows {
                                DeckRow {
                                    key: "{row.id}",
                                    loading: loading_id == Some(row.id),
                                    row: row.clone(),
                                    on_edit: open_existing,
                                }
                            }
                        }
                    }
                },
            }

            if let EditorSession::Open(target) = current_session {
                DeckEditorModal {
                    target,
                    on_saved,
                    on_close: move |()| session.set(EditorSession::Closed),
                }
            }
        }
    }
}

#[component]
fn DeckRow(row: DeckRowVm, loading: bool, on_edit: EventHandler<DeckId>) -> Element {
    let deck_id = row.id;
    rsx! {
        li { class: "deck-row",
            span { class: "deck-avatar", "{row.avatar}" }
            span { class: "deck-title", "{row.title}" }
            div { class: "deck-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: loading,
                    onclick: move |_| on_edit.call(deck_id),
                    if loading { "Opening..." } else { "Edit" }
                }
                Link { class: "btn btn-ghost", to: Route::Study { deck_id: deck_id.value() }, "Study" }
            }
        }
    }
}
