use std::sync::Arc;

use deck_core::model::{DeckId, Identity, Owner, SubjectId};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{DeckEditorService, DeckService};
use storage::repository::{CardRepository, DeckRepository, NewCardRecord, NewDeckRecord, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{DeckEditorModal, HomeView, StudyView};

#[derive(Clone)]
struct TestApp {
    identity: Identity,
    deck_service: Arc<DeckService>,
    editor_service: Arc<DeckEditorService>,
}

impl UiApp for TestApp {
    fn identity(&self) -> Identity {
        self.identity.clone()
    }

    fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    fn editor_service(&self) -> Arc<DeckEditorService> {
        Arc::clone(&self.editor_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Study(u64),
    NewDeckEditor,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Study(deck_id) => rsx! { StudyView { deck_id } },
        ViewKind::NewDeckEditor => rsx! {
            DeckEditorModal {
                target: None,
                on_saved: |_| {},
                on_close: |()| {},
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub deck_id: DeckId,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_identity() -> Identity {
    Identity::new(Owner::parse("ada").expect("owner"), SubjectId::new(1))
}

/// Seed one deck with the given cards into `storage`.
pub async fn seed_deck(storage: &Storage, title: &str, cards: &[(&str, &str)]) -> DeckId {
    let identity = test_identity();
    let deck_id = storage
        .decks
        .insert_new_deck(NewDeckRecord {
            owner: identity.owner.clone(),
            subject_id: identity.subject_id,
            title: title.to_string(),
        })
        .await
        .expect("seed deck");
    for (front, back) in cards {
        storage
            .cards
            .insert_new_card(NewCardRecord {
                owner: identity.owner.clone(),
                deck_id,
                front: (*front).to_string(),
                back: (*back).to_string(),
            })
            .await
            .expect("seed card");
    }
    deck_id
}

pub async fn setup_view_harness(view: ViewKind, deck_title: &str) -> ViewHarness {
    let storage = Storage::in_memory();
    let deck_id = seed_deck(
        &storage,
        deck_title,
        &[("France capital?", "Paris"), ("Spain capital?", "Madrid")],
    )
    .await;
    setup_view_harness_with_storage(view, storage, deck_id)
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: Storage,
    deck_id: DeckId,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        identity: test_identity(),
        deck_service: Arc::new(DeckService::from_storage(&storage)),
        editor_service: Arc::new(DeckEditorService::from_storage(&storage)),
    });

    let view = match view {
        ViewKind::Study(_) => ViewKind::Study(deck_id.value()),
        other => other,
    };

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        deck_id,
    }
}
