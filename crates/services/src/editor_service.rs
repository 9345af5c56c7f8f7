use std::sync::Arc;

use deck_core::editor::{CardUpsert, CardWrite, DeckEditor, DeckUpsert, SavePlan};
use deck_core::model::{CardId, DeckId, Identity};
use futures_util::future::join_all;
use storage::repository::{
    CardRepository, DeckRepository, NewCardRecord, NewDeckRecord, Storage, StorageError,
};

use crate::error::{CardFailure, DeleteError, SaveError};

/// What a save wrote, card by card.
#[derive(Debug)]
pub struct SyncReport {
    pub deck_id: DeckId,
    pub attempted: usize,
    pub written: Vec<CardWrite>,
    pub failed: Vec<CardFailure>,
}

impl SyncReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes editor sessions to the remote store.
#[derive(Clone)]
pub struct DeckEditorService {
    decks: Arc<dyn DeckRepository>,
    cards: Arc<dyn CardRepository>,
}

impl DeckEditorService {
    #[must_use]
    pub fn new(decks: Arc<dyn DeckRepository>, cards: Arc<dyn CardRepository>) -> Self {
        Self { decks, cards }
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(Arc::clone(&storage.decks), Arc::clone(&storage.cards))
    }

    /// Upsert the deck, then upsert every card in the plan concurrently.
    ///
    /// Card writes are not ordered and a failing write does not cancel its
    /// siblings; each outcome is recorded in the report. Nothing is rolled back.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Deck` if the deck write fails; no card is written then.
    pub async fn sync(&self, identity: &Identity, plan: SavePlan) -> Result<SyncReport, SaveError> {
        let deck_id = self
            .upsert_deck(identity, &plan.deck)
            .await
            .map_err(|err| {
                log::warn!("deck write failed: {err}");
                SaveError::Deck(err)
            })?;

        let results = join_all(
            plan.cards
                .iter()
                .map(|card| self.upsert_card(identity, deck_id, card)),
        )
        .await;

        let mut written = Vec::with_capacity(results.len());
        let mut failed = Vec::new();
        for (card, result) in plan.cards.iter().zip(results) {
            match result {
                Ok(id) => written.push(CardWrite {
                    slot: card.slot,
                    id,
                }),
                Err(error) => {
                    log::warn!("card write failed (deck {deck_id}, slot {}): {error}", card.slot);
                    failed.push(CardFailure {
                        slot: card.slot,
                        card_id: card.id,
                        error,
                    });
                }
            }
        }

        Ok(SyncReport {
            deck_id,
            attempted: plan.cards.len(),
            written,
            failed,
        })
    }

    async fn upsert_deck(&self, identity: &Identity, deck: &DeckUpsert) -> Result<DeckId, StorageError> {
        match deck {
            DeckUpsert::Create { title } => {
                self.decks
                    .insert_new_deck(NewDeckRecord {
                        owner: identity.owner.clone(),
                        subject_id: identity.subject_id,
                        title: title.as_str().to_owned(),
                    })
                    .await
            }
            DeckUpsert::Update { id, title } => {
                self.decks.update_deck_title(*id, title.as_str()).await?;
                Ok(*id)
            }
        }
    }

    async fn upsert_card(
        &self,
        identity: &Identity,
        deck_id: DeckId,
        card: &CardUpsert,
    ) -> Result<CardId, StorageError> {
        match card.id {
            Some(id) => {
                self.cards.update_card(id, &card.front, &card.back).await?;
                Ok(id)
            }
            None => {
                self.cards
                    .insert_new_card(NewCardRecord {
                        owner: identity.owner.clone(),
                        deck_id,
                        front: card.front.clone(),
                        back: card.back.clone(),
                    })
                    .await
            }
        }
    }

    /// Validate, write, and settle the editor in one call.
    ///
    /// For callers that own the editor outright. The desktop UI runs the same
    /// steps split around its signal writes (`prepare_save`, [`Self::sync`],
    /// [`apply_sync_report`]).
    ///
    /// On success the editor is reset to a blank new deck and `on_saved` runs
    /// once with the deck id. Validation failures make no remote calls and leave
    /// the editor untouched.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Invalid` for validation failures, `SaveError::Deck`
    /// if the deck write fails, and `SaveError::Cards` if any card write fails.
    pub async fn save<F>(
        &self,
        editor: &mut DeckEditor,
        identity: &Identity,
        on_saved: F,
    ) -> Result<DeckId, SaveError>
    where
        F: FnOnce(DeckId),
    {
        let plan = editor.prepare_save()?;
        let report = self.sync(identity, plan).await?;
        let deck_id = apply_sync_report(editor, report)?;
        on_saved(deck_id);
        Ok(deck_id)
    }

    /// Remove a card from the store.
    ///
    /// # Errors
    ///
    /// Returns `DeleteError::Storage` if the store rejects the delete.
    pub async fn delete_card(&self, id: CardId) -> Result<(), DeleteError> {
        self.cards.delete_card(id).await.map_err(|err| {
            log::warn!("card delete failed ({id}): {err}");
            DeleteError::Storage(err)
        })?;
        log::info!("deleted card {id}");
        Ok(())
    }

    /// Carry out the delete the editor is waiting on.
    ///
    /// For callers that own the editor outright; the desktop UI calls
    /// [`Self::delete_card`] and applies the result itself.
    ///
    /// The card leaves the editor only after the store confirms.
    ///
    /// # Errors
    ///
    /// Returns `DeleteError::Editor` if no delete was requested and
    /// `DeleteError::Storage` if the store rejects it.
    pub async fn delete_confirmed(&self, editor: &mut DeckEditor) -> Result<CardId, DeleteError> {
        let id = editor.confirm_delete()?;
        self.delete_card(id).await?;
        editor.apply_delete(id);
        Ok(id)
    }
}

/// Settle the editor after a sync.
///
/// A complete report resets the editor. Otherwise the editor keeps its content,
/// switches to edit mode for the written deck, and tags the cards that were
/// created so that the next save updates them.
///
/// # Errors
///
/// Returns `SaveError::Cards` when any card write failed.
pub fn apply_sync_report(editor: &mut DeckEditor, report: SyncReport) -> Result<DeckId, SaveError> {
    let SyncReport {
        deck_id,
        attempted,
        written,
        failed,
    } = report;

    if failed.is_empty() {
        log::info!("saved deck {deck_id} with {attempted} cards");
        editor.reset();
        return Ok(deck_id);
    }

    editor.reconcile(deck_id, &written);
    Err(SaveError::Cards {
        deck_id,
        attempted,
        failed,
    })
}
