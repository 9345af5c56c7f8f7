use crate::model::ids::{CardId, DeckId};

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// A card as the remote store knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    deck_id: DeckId,
    front: String,
    back: String,
}

impl Card {
    #[must_use]
    pub fn new(
        id: CardId,
        deck_id: DeckId,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self {
            id,
            deck_id,
            front: front.into(),
            back: back.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn deck_id(&self) -> DeckId {
        self.deck_id
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }
}

/// A card as it is being edited.
///
/// `id` is `None` until the card has been written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub id: Option<CardId>,
    pub front: String,
    pub back: String,
}

impl CardDraft {
    /// An empty, untagged card.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: None,
            front: front.into(),
            back: back.into(),
        }
    }

    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: Some(card.id()),
            front: card.front().to_owned(),
            back: card.back().to_owned(),
        }
    }

    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Both sides carry more than whitespace.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.front.trim().is_empty() && !self.back.trim().is_empty()
    }

    /// Untagged with nothing typed on either side.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.id.is_none() && self.front.is_empty() && self.back.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
