use async_trait::async_trait;
use deck_core::model::{Card, CardId, Deck, DeckId, Owner, SubjectId};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("request rejected with status {status}")]
    Rejected { status: u16 },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Fields the store needs to create a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeckRecord {
    pub owner: Owner,
    pub subject_id: SubjectId,
    pub title: String,
}

/// Fields the store needs to create a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCardRecord {
    pub owner: Owner,
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
}

/// Remote contract for decks.
#[async_trait]
pub trait DeckRepository: Send + Sync {
    /// Create a deck and return the id the store assigned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the deck cannot be stored.
    async fn insert_new_deck(&self, deck: NewDeckRecord) -> Result<DeckId, StorageError>;

    /// Replace the title of an existing deck.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn update_deck_title(&self, id: DeckId, title: &str) -> Result<(), StorageError>;

    /// Fetch a deck by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_deck(&self, id: DeckId) -> Result<Deck, StorageError>;

    /// List the decks an owner keeps under a subject, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be queried.
    async fn list_decks(
        &self,
        owner: &Owner,
        subject_id: SubjectId,
    ) -> Result<Vec<Deck>, StorageError>;
}

/// Remote contract for cards.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Create a card under a deck and return the id the store assigned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the deck is missing, or other storage errors.
    async fn insert_new_card(&self, card: NewCardRecord) -> Result<CardId, StorageError>;

    /// Replace both sides of an existing card.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn update_card(&self, id: CardId, front: &str, back: &str) -> Result<(), StorageError>;

    /// Remove a card.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete_card(&self, id: CardId) -> Result<(), StorageError>;

    /// List the cards of a deck, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be queried.
    async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, StorageError>;
}

#[derive(Default)]
struct MemoryState {
    last_deck_id: u64,
    last_card_id: u64,
    decks: BTreeMap<DeckId, (Owner, Deck)>,
    cards: BTreeMap<CardId, Card>,
}

/// Simple in-memory repository implementation for testing and demos.
///
/// Ids are handed out sequentially from 1, like the remote store does.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl DeckRepository for InMemoryRepository {
    async fn insert_new_deck(&self, deck: NewDeckRecord) -> Result<DeckId, StorageError> {
        let mut guard = self.lock()?;
        guard.last_deck_id += 1;
        let id = DeckId::new(guard.last_deck_id);
        guard
            .decks
            .insert(id, (deck.owner, Deck::new(id, deck.subject_id, deck.title)));
        Ok(id)
    }

    async fn update_deck_title(&self, id: DeckId, title: &str) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        let (_, deck) = guard.decks.get_mut(&id).ok_or(StorageError::NotFound)?;
        *deck = deck.with_title(title);
        Ok(())
    }

    async fn get_deck(&self, id: DeckId) -> Result<Deck, StorageError> {
        let guard = self.lock()?;
        guard
            .decks
            .get(&id)
            .map(|(_, deck)| deck.clone())
            .ok_or(StorageError::NotFound)
    }

    async fn list_decks(
        &self,
        owner: &Owner,
        subject_id: SubjectId,
    ) -> Result<Vec<Deck>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .decks
            .values()
            .filter(|(deck_owner, deck)| deck_owner == owner && deck.subject_id() == subject_id)
            .map(|(_, deck)| deck.clone())
            .collect())
    }
}

#[async_trait]
impl CardRepository for InMemoryRepository {
    async fn insert_new_card(&self, card: NewCardRecord) -> Result<CardId, StorageError> {
        let mut guard = self.lock()?;
        if !guard.decks.contains_key(&card.deck_id) {
            return Err(StorageError::NotFound);
        }
        guard.last_card_id += 1;
        let id = CardId::new(guard.last_card_id);
        guard
            .cards
            .insert(id, Card::new(id, card.deck_id, card.front, card.back));
        Ok(id)
    }

    async fn update_card(&self, id: CardId, front: &str, back: &str) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        let card = guard.cards.get_mut(&id).ok_or(StorageError::NotFound)?;
        *card = Card::new(id, card.deck_id(), front, back);
        Ok(())
    }

    async fn delete_card(&self, id: CardId) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard
            .cards
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }

    async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .cards
            .values()
            .filter(|card| card.deck_id() == deck_id)
            .cloned()
            .collect())
    }
}

/// Aggregates deck and card repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub decks: Arc<dyn DeckRepository>,
    pub cards: Arc<dyn CardRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let decks: Arc<dyn DeckRepository> = Arc::new(repo.clone());
        let cards: Arc<dyn CardRepository> = Arc::new(repo);
        Self { decks, cards }
    }
}
