use deck_core::model::{Card, CardId, DeckId};

use super::wire::{CardBody, CreateCardBody, CreatedBody, UpdateCardBody};
use super::{HttpRepository, decode};
use crate::repository::{CardRepository, NewCardRecord, StorageError};

#[async_trait::async_trait]
impl CardRepository for HttpRepository {
    async fn insert_new_card(&self, card: NewCardRecord) -> Result<CardId, StorageError> {
        let url = self.endpoint("flashcards/")?;
        let body = CreateCardBody {
            owner: card.owner.as_str(),
            deck_id: card.deck_id,
            front: &card.front,
            back: &card.back,
        };
        let response = self.send(self.client.post(url).json(&body)).await?;
        let created: CreatedBody = decode(response).await?;
        Ok(CardId::new(created.id))
    }

    async fn update_card(&self, id: CardId, front: &str, back: &str) -> Result<(), StorageError> {
        let url = self.endpoint(&format!("flashcards/{id}/"))?;
        self.send(self.client.put(url).json(&UpdateCardBody { front, back }))
            .await?;
        Ok(())
    }

    async fn delete_card(&self, id: CardId) -> Result<(), StorageError> {
        let url = self.endpoint(&format!("flashcards/{id}/"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, StorageError> {
        let url = self.endpoint(&format!("decks/{deck_id}/flashcards/"))?;
        let response = self.send(self.client.get(url)).await?;
        let bodies: Vec<CardBody> = decode(response).await?;
        let mut cards: Vec<Card> = bodies.into_iter().map(Card::from).collect();
        cards.sort_by_key(Card::id);
        Ok(cards)
    }
}
