use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use deck_core::model::{Card, CardDraft, CardId, DeckId};
use deck_core::{DeckEditor, EditTarget, EditorMode};
use services::DeckService;
use storage::repository::{CardRepository, NewCardRecord, Storage, StorageError};

use crate::views::test_harness::{seed_deck, test_identity};

use super::actions::EditorIntent;
use super::test_harness::setup_editor_harness;

#[tokio::test(flavor = "current_thread")]
async fn save_intent_creates_deck_and_resets_editor() {
    let storage = Storage::in_memory();
    let mut harness = setup_editor_harness(&storage, None);

    harness.send(EditorIntent::SetTitle("Capitals".to_string()));
    harness.send(EditorIntent::EditFront("France capital?".to_string()));
    harness.send(EditorIntent::EditBack("Paris".to_string()));
    harness.send(EditorIntent::Save);
    harness.settle().await;

    let saved = harness.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(harness.editor(), DeckEditor::new());
    assert_eq!(harness.notice(), None);

    let decks = DeckService::from_storage(&storage);
    let listed = decks.list_decks(&test_identity()).await.expect("list decks");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), saved[0]);
    let cards = decks.list_cards(saved[0]).await.expect("list cards");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].back(), "Paris");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_title_shows_notice_without_writing() {
    let storage = Storage::in_memory();
    let mut harness = setup_editor_harness(&storage, None);

    harness.send(EditorIntent::SetTitle("   ".to_string()));
    harness.send(EditorIntent::EditFront("Q".to_string()));
    harness.send(EditorIntent::EditBack("A".to_string()));
    let before = harness.editor();
    harness.send(EditorIntent::Save);
    harness.settle().await;

    assert_eq!(harness.notice().as_deref(), Some("Please enter a deck title."));
    assert_eq!(harness.editor(), before);
    assert!(harness.saved().is_empty());
    let listed = DeckService::from_storage(&storage)
        .list_decks(&test_identity())
        .await
        .expect("list decks");
    assert!(listed.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn typing_clears_the_notice() {
    let storage = Storage::in_memory();
    let mut harness = setup_editor_harness(&storage, None);

    harness.send(EditorIntent::Save);
    assert!(harness.notice().is_some());
    harness.send(EditorIntent::SetTitle("C".to_string()));
    assert_eq!(harness.notice(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn delete_intents_confirm_then_remove() {
    let storage = Storage::in_memory();
    let deck_id = seed_deck(&storage, "Capitals", &[("France?", "Paris"), ("Spain?", "Madrid")]).await;
    let target: EditTarget = DeckService::from_storage(&storage)
        .load_for_editing(deck_id)
        .await
        .expect("load");
    let mut harness = setup_editor_harness(&storage, Some(target));
    assert_eq!(harness.editor().mode(), EditorMode::Edit(deck_id));

    // declined
    harness.send(EditorIntent::RequestDelete);
    assert!(harness.editor().pending_delete().is_some());
    harness.send(EditorIntent::CancelDelete);
    assert_eq!(harness.editor().pending_delete(), None);
    assert_eq!(harness.editor().len(), 2);

    // confirmed
    harness.send(EditorIntent::Next);
    harness.send(EditorIntent::RequestDelete);
    harness.send(EditorIntent::ConfirmDelete);
    harness.settle().await;

    let editor = harness.editor();
    assert_eq!(editor.len(), 1);
    assert_eq!(editor.current_index(), 0);
    assert_eq!(editor.current_card().front, "France?");
    let cards = DeckService::from_storage(&storage)
        .list_cards(deck_id)
        .await
        .expect("list cards");
    assert_eq!(cards.len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn unsaved_card_cannot_be_deleted() {
    let storage = Storage::in_memory();
    let mut harness = setup_editor_harness(&storage, None);

    harness.send(EditorIntent::RequestDelete);

    assert_eq!(
        harness.notice().as_deref(),
        Some("only saved cards can be deleted")
    );
    assert_eq!(harness.editor().cards(), &[CardDraft::blank()]);
}

/// Card store that can be told to reject some writes.
struct FlakyCards {
    inner: Arc<dyn CardRepository>,
    reject_front: &'static str,
    failing: Arc<AtomicBool>,
}

impl FlakyCards {
    fn rejecting(&self) -> bool {
        self.failing.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CardRepository for FlakyCards {
    async fn insert_new_card(&self, card: NewCardRecord) -> Result<CardId, StorageError> {
        if self.rejecting() && card.front == self.reject_front {
            return Err(StorageError::Connection("down".to_string()));
        }
        self.inner.insert_new_card(card).await
    }

    async fn update_card(&self, id: CardId, front: &str, back: &str) -> Result<(), StorageError> {
        self.inner.update_card(id, front, back).await
    }

    async fn delete_card(&self, id: CardId) -> Result<(), StorageError> {
        if self.rejecting() {
            return Err(StorageError::Connection("down".to_string()));
        }
        self.inner.delete_card(id).await
    }

    async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, StorageError> {
        self.inner.list_cards(deck_id).await
    }
}

fn flaky_storage(reject_front: &'static str) -> (Storage, Arc<AtomicBool>) {
    let base = Storage::in_memory();
    let failing = Arc::new(AtomicBool::new(true));
    let storage = Storage {
        decks: base.decks,
        cards: Arc::new(FlakyCards {
            inner: base.cards,
            reject_front,
            failing: Arc::clone(&failing),
        }),
    };
    (storage, failing)
}

#[tokio::test(flavor = "current_thread")]
async fn partial_save_keeps_content_and_retry_updates() {
    let (storage, failing) = flaky_storage("Spain capital?");
    let mut harness = setup_editor_harness(&storage, None);

    harness.send(EditorIntent::SetTitle("Capitals".to_string()));
    harness.send(EditorIntent::EditFront("France capital?".to_string()));
    harness.send(EditorIntent::EditBack("Paris".to_string()));
    harness.send(EditorIntent::AddCard);
    harness.send(EditorIntent::EditFront("Spain capital?".to_string()));
    harness.send(EditorIntent::EditBack("Madrid".to_string()));
    harness.send(EditorIntent::Save);
    harness.settle().await;

    assert!(harness.saved().is_empty());
    assert_eq!(
        harness.notice().as_deref(),
        Some("Failed to save 1 of 2 cards. Please try again.")
    );
    let editor = harness.editor();
    let decks = DeckService::from_storage(&storage);
    let listed = decks.list_decks(&test_identity()).await.expect("list decks");
    assert_eq!(listed.len(), 1);
    let deck_id = listed[0].id();
    assert_eq!(editor.mode(), EditorMode::Edit(deck_id));
    assert_eq!(editor.len(), 2);
    assert!(editor.cards()[0].id.is_some());
    assert_eq!(editor.cards()[1].id, None);
    assert_eq!(editor.cards()[1].back, "Madrid");

    failing.store(false, Ordering::SeqCst);
    harness.send(EditorIntent::Save);
    harness.settle().await;

    assert_eq!(harness.saved(), vec![deck_id]);
    assert_eq!(harness.editor(), DeckEditor::new());
    let listed = decks.list_decks(&test_identity()).await.expect("list decks");
    assert_eq!(listed.len(), 1);
    let cards = decks.list_cards(deck_id).await.expect("list cards");
    assert_eq!(cards.len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn failed_delete_keeps_the_card() {
    let (storage, _failing) = flaky_storage("unused");
    let deck_id = seed_deck(&storage, "Capitals", &[("France?", "Paris"), ("Spain?", "Madrid")]).await;
    let target = DeckService::from_storage(&storage)
        .load_for_editing(deck_id)
        .await
        .expect("load");
    let mut harness = setup_editor_harness(&storage, Some(target));

    harness.send(EditorIntent::RequestDelete);
    harness.send(EditorIntent::ConfirmDelete);
    harness.settle().await;

    assert_eq!(
        harness.notice().as_deref(),
        Some("Failed to delete the card. Please try again.")
    );
    let editor = harness.editor();
    assert_eq!(editor.len(), 2);
    assert_eq!(editor.current_card().front, "France?");
    assert_eq!(editor.pending_delete(), None);
    let cards = DeckService::from_storage(&storage)
        .list_cards(deck_id)
        .await
        .expect("list cards");
    assert_eq!(cards.len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn moving_away_closes_the_delete_prompt() {
    let storage = Storage::in_memory();
    let deck_id = seed_deck(&storage, "Capitals", &[("France?", "Paris"), ("Spain?", "Madrid")]).await;
    let target = DeckService::from_storage(&storage)
        .load_for_editing(deck_id)
        .await
        .expect("load");
    let mut harness = setup_editor_harness(&storage, Some(target));

    harness.send(EditorIntent::RequestDelete);
    harness.send(EditorIntent::Next);
    harness.send(EditorIntent::ConfirmDelete);
    harness.settle().await;

    assert_eq!(harness.editor().len(), 2);
    assert_eq!(harness.editor().current_card().front, "Spain?");
    let cards = DeckService::from_storage(&storage)
        .list_cards(deck_id)
        .await
        .expect("list cards");
    assert_eq!(cards.len(), 2);
}
