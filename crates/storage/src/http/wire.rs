//! JSON bodies exchanged with the REST backend.

use deck_core::model::{Card, CardId, Deck, DeckId, SubjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct CreateDeckBody<'a> {
    pub owner: &'a str,
    pub title: &'a str,
    pub subject_id: SubjectId,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateDeckBody<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateCardBody<'a> {
    pub owner: &'a str,
    pub deck_id: DeckId,
    pub front: &'a str,
    pub back: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateCardBody<'a> {
    pub front: &'a str,
    pub back: &'a str,
}

/// Response to a create call; only the assigned id is read.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedBody {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeckBody {
    pub id: DeckId,
    pub title: String,
    #[serde(alias = "subject")]
    pub subject_id: SubjectId,
}

impl From<DeckBody> for Deck {
    fn from(body: DeckBody) -> Self {
        Deck::new(body.id, body.subject_id, body.title)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CardBody {
    pub id: CardId,
    #[serde(alias = "deck")]
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
}

impl From<CardBody> for Card {
    fn from(body: CardBody) -> Self {
        Card::new(body.id, body.deck_id, body.front, body.back)
    }
}
