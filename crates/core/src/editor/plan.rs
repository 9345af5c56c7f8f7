use crate::model::{CardDraft, CardId, DeckId, DeckTitle};

/// How the deck itself is written on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckUpsert {
    Create { title: DeckTitle },
    Update { id: DeckId, title: DeckTitle },
}

impl DeckUpsert {
    #[must_use]
    pub fn title(&self) -> &DeckTitle {
        match self {
            Self::Create { title } | Self::Update { title, .. } => title,
        }
    }
}

/// One card write, tied back to its position in the editor by `slot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardUpsert {
    pub slot: usize,
    pub id: Option<CardId>,
    pub front: String,
    pub back: String,
}

impl CardUpsert {
    pub(crate) fn from_draft(slot: usize, draft: &CardDraft) -> Self {
        Self {
            slot,
            id: draft.id,
            front: draft.front.clone(),
            back: draft.back.clone(),
        }
    }

    #[must_use]
    pub fn is_create(&self) -> bool {
        self.id.is_none()
    }
}

/// Everything a save needs to send, computed from a validated editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    pub deck: DeckUpsert,
    pub cards: Vec<CardUpsert>,
}

/// A card write that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardWrite {
    pub slot: usize,
    pub id: CardId,
}
