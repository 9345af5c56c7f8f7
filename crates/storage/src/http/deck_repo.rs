use deck_core::model::{Deck, DeckId, Owner, SubjectId};

use super::wire::{CreateDeckBody, CreatedBody, DeckBody, UpdateDeckBody};
use super::{HttpRepository, decode};
use crate::repository::{DeckRepository, NewDeckRecord, StorageError};

#[async_trait::async_trait]
impl DeckRepository for HttpRepository {
    async fn insert_new_deck(&self, deck: NewDeckRecord) -> Result<DeckId, StorageError> {
        let url = self.endpoint("decks/")?;
        let body = CreateDeckBody {
            owner: deck.owner.as_str(),
            title: &deck.title,
            subject_id: deck.subject_id,
        };
        let response = self.send(self.client.post(url).json(&body)).await?;
        let created: CreatedBody = decode(response).await?;
        Ok(DeckId::new(created.id))
    }

    async fn update_deck_title(&self, id: DeckId, title: &str) -> Result<(), StorageError> {
        let url = self.endpoint(&format!("decks/{id}/"))?;
        self.send(self.client.put(url).json(&UpdateDeckBody { title }))
            .await?;
        Ok(())
    }

    async fn get_deck(&self, id: DeckId) -> Result<Deck, StorageError> {
        let url = self.endpoint(&format!("decks/{id}/"))?;
        let response = self.send(self.client.get(url)).await?;
        let body: DeckBody = decode(response).await?;
        Ok(body.into())
    }

    async fn list_decks(
        &self,
        owner: &Owner,
        subject_id: SubjectId,
    ) -> Result<Vec<Deck>, StorageError> {
        let mut url = self.endpoint("decks/")?;
        url.query_pairs_mut()
            .append_pair("owner", owner.as_str())
            .append_pair("subject_id", &subject_id.to_string());
        let response = self.send(self.client.get(url)).await?;
        let bodies: Vec<DeckBody> = decode(response).await?;
        let mut decks: Vec<Deck> = bodies.into_iter().map(Deck::from).collect();
        decks.sort_by_key(Deck::id);
        Ok(decks)
    }
}
