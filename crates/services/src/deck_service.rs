use std::sync::Arc;

use deck_core::editor::EditTarget;
use deck_core::model::{Card, Deck, DeckId, Identity};
use futures_util::future::try_join;
use storage::repository::{CardRepository, DeckRepository, Storage};

use crate::error::DeckServiceError;

/// Read side of the deck list and the study view.
#[derive(Clone)]
pub struct DeckService {
    decks: Arc<dyn DeckRepository>,
    cards: Arc<dyn CardRepository>,
}

impl DeckService {
    #[must_use]
    pub fn new(decks: Arc<dyn DeckRepository>, cards: Arc<dyn CardRepository>) -> Self {
        Self { decks, cards }
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(Arc::clone(&storage.decks), Arc::clone(&storage.cards))
    }

    /// Decks the identity owns under its subject.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if repository access fails.
    pub async fn list_decks(&self, identity: &Identity) -> Result<Vec<Deck>, DeckServiceError> {
        let decks = self
            .decks
            .list_decks(&identity.owner, identity.subject_id)
            .await?;
        Ok(decks)
    }

    /// Fetch a deck together with its cards, ready to open in the editor.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if either lookup fails.
    pub async fn load_for_editing(&self, deck_id: DeckId) -> Result<EditTarget, DeckServiceError> {
        let (deck, cards) =
            try_join(self.decks.get_deck(deck_id), self.cards.list_cards(deck_id)).await?;
        Ok(EditTarget { deck, cards })
    }

    /// Cards of a deck in store order.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if repository access fails.
    pub async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, DeckServiceError> {
        let cards = self.cards.list_cards(deck_id).await?;
        Ok(cards)
    }
}
