use std::sync::Arc;

use deck_core::model::{Deck, DeckId, Owner, SubjectId};
use storage::repository::{DeckRepository, NewDeckRecord, Storage, StorageError};

use super::test_harness::{
    ViewKind, seed_deck, setup_view_harness, setup_view_harness_with_storage,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_decks() {
    let mut harness = setup_view_harness(ViewKind::Home, "Capitals").await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Capitals"), "missing deck title in {html}");
    assert!(html.contains("Edit"), "missing edit action in {html}");
    assert!(html.contains("Study"), "missing study link in {html}");
    assert!(html.contains("New deck"), "missing new deck action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_state() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage, DeckId::new(1));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No decks yet"), "missing empty state in {html}");
}

struct FailingDeckRepo;

#[async_trait::async_trait]
impl DeckRepository for FailingDeckRepo {
    async fn insert_new_deck(&self, _deck: NewDeckRecord) -> Result<DeckId, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn update_deck_title(&self, _id: DeckId, _title: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_deck(&self, _id: DeckId) -> Result<Deck, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_decks(
        &self,
        _owner: &Owner,
        _subject_id: SubjectId,
    ) -> Result<Vec<Deck>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let storage = Storage {
        decks: Arc::new(FailingDeckRepo),
        cards: Storage::in_memory().cards,
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage, DeckId::new(1));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_first_card_front() {
    let mut harness = setup_view_harness(ViewKind::Study(0), "Capitals").await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Card 1 of 2"), "missing position in {html}");
    assert!(html.contains("France capital?"), "missing front in {html}");
    assert!(!html.contains("Paris"), "back should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_empty_deck() {
    let storage = Storage::in_memory();
    let deck_id = seed_deck(&storage, "Empty", &[]).await;
    let mut harness = setup_view_harness_with_storage(ViewKind::Study(0), storage, deck_id);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("no cards yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn new_deck_editor_smoke_renders_blank_card() {
    let mut harness = setup_view_harness(ViewKind::NewDeckEditor, "Unused").await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("New deck"), "missing heading in {html}");
    assert!(html.contains("Card 1 of 1"), "missing position in {html}");
    assert!(html.contains("(front is empty)"), "missing placeholder in {html}");
    assert!(html.contains("Save"), "missing save in {html}");
    assert!(
        !html.contains("Delete this card?"),
        "confirmation should be closed in {html}"
    );
}
