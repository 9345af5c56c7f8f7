//! In-memory editing state for one deck: its title, an ordered list of card
//! drafts, and the cursor over them.
//!
//! The editor performs no I/O. Saving is split into [`DeckEditor::prepare_save`],
//! which validates and produces a [`SavePlan`], and the reconciliation calls
//! ([`DeckEditor::reset`] / [`DeckEditor::reconcile`]) applied once the remote
//! writes have settled. Deleting is an explicit request → confirm → apply
//! sequence so no blocking prompt is needed.

mod plan;

use thiserror::Error;

use crate::cursor::CardCursor;
use crate::model::{Card, CardDraft, CardId, Deck, DeckError, DeckId, DeckTitle};

pub use plan::{CardUpsert, CardWrite, DeckUpsert, SavePlan};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditorError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("add at least one card with both a front and a back")]
    NoValidCards,

    #[error("only saved cards can be deleted")]
    CardNotPersisted,

    #[error("no card is waiting for delete confirmation")]
    NoPendingDelete,
}

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

/// Whether the editor will create a new deck or update an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(DeckId),
}

impl EditorMode {
    #[must_use]
    pub fn deck_id(&self) -> Option<DeckId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(*id),
        }
    }
}

/// An existing deck and its cards, used to open the editor in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub deck: Deck,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEditor {
    mode: EditorMode,
    title: String,
    cards: Vec<CardDraft>,
    cursor: CardCursor,
    pending_delete: Option<CardId>,
}

impl Default for DeckEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckEditor {
    /// A blank editor in create mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            cards: vec![CardDraft::blank()],
            cursor: CardCursor::start(),
            pending_delete: None,
        }
    }

    /// Editor seeded from `target`, or blank when `None`.
    #[must_use]
    pub fn opened(target: Option<EditTarget>) -> Self {
        let mut editor = Self::new();
        editor.open(target);
        editor
    }

    /// Reinitialise the session.
    ///
    /// `Some(target)` loads the deck title and its cards (tagged with their ids);
    /// `None` starts a new deck with one blank card.
    pub fn open(&mut self, target: Option<EditTarget>) {
        match target {
            Some(EditTarget { deck, cards }) => {
                self.mode = EditorMode::Edit(deck.id());
                self.title = deck.title().to_owned();
                self.cards = cards.iter().map(CardDraft::from_card).collect();
                if self.cards.is_empty() {
                    self.cards.push(CardDraft::blank());
                }
            }
            None => {
                self.mode = EditorMode::Create;
                self.title.clear();
                self.cards = vec![CardDraft::blank()];
            }
        }
        self.cursor = CardCursor::start();
        self.pending_delete = None;
    }

    /// Back to a blank create-mode session.
    pub fn reset(&mut self) {
        self.open(None);
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn cards(&self) -> &[CardDraft] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; the list holds at least one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.cursor.is_flipped()
    }

    #[must_use]
    pub fn current_card(&self) -> &CardDraft {
        &self.cards[self.cursor.index()]
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.cursor.has_prev()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor.has_next(self.cards.len())
    }

    /// The current card can be deleted remotely.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.current_card().is_persisted()
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<CardId> {
        self.pending_delete
    }

    // ─── Editing ───────────────────────────────────────────────────────────────

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    pub fn flip(&mut self) {
        self.cursor.flip();
    }

    /// Moving the cursor drops any pending delete; it named the old card.
    pub fn prev(&mut self) -> bool {
        self.pending_delete = None;
        self.cursor.prev()
    }

    pub fn next(&mut self) -> bool {
        self.pending_delete = None;
        self.cursor.next(self.cards.len())
    }

    /// Append a blank card and move to it.
    pub fn add_card(&mut self) {
        self.pending_delete = None;
        self.cards.push(CardDraft::blank());
        self.cursor.jump_to(self.cards.len() - 1);
    }

    pub fn edit_front(&mut self, text: impl Into<String>) {
        let index = self.cursor.index();
        if let Some(card) = self.cards.get_mut(index) {
            card.front = text.into();
        }
    }

    pub fn edit_back(&mut self, text: impl Into<String>) {
        let index = self.cursor.index();
        if let Some(card) = self.cards.get_mut(index) {
            card.back = text.into();
        }
    }

    // ─── Deleting ──────────────────────────────────────────────────────────────

    /// Ask to delete the current card. Nothing changes until confirmed.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::CardNotPersisted` if the current card has no id.
    pub fn request_delete(&mut self) -> Result<CardId, EditorError> {
        let id = self
            .current_card()
            .id
            .ok_or(EditorError::CardNotPersisted)?;
        self.pending_delete = Some(id);
        Ok(id)
    }

    /// Decline a pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the pending delete and hand back the id to remove from the store.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NoPendingDelete` if nothing was requested.
    pub fn confirm_delete(&mut self) -> Result<CardId, EditorError> {
        self.pending_delete
            .take()
            .ok_or(EditorError::NoPendingDelete)
    }

    /// Drop a card the store has deleted.
    ///
    /// Keeps one blank card when the list would become empty and steps the
    /// cursor back by one. Returns `false` if no card carries `id`.
    pub fn apply_delete(&mut self, id: CardId) -> bool {
        let Some(position) = self.cards.iter().position(|card| card.id == Some(id)) else {
            return false;
        };
        self.cards.remove(position);
        if self.cards.is_empty() {
            self.cards.push(CardDraft::blank());
        }
        let index = self.cursor.index().saturating_sub(1);
        self.cursor.jump_to(index);
        self.cursor.clamp(self.cards.len());
        true
    }

    // ─── Saving ────────────────────────────────────────────────────────────────

    /// Validate the session and describe the writes a save must perform.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Deck` when the title is blank and
    /// `EditorError::NoValidCards` when no card has both sides filled in.
    pub fn prepare_save(&self) -> Result<SavePlan, EditorError> {
        let title = DeckTitle::parse(self.title.as_str())?;

        let cards: Vec<CardUpsert> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_valid())
            .map(|(slot, card)| CardUpsert::from_draft(slot, card))
            .collect();
        if cards.is_empty() {
            return Err(EditorError::NoValidCards);
        }

        let deck = match self.mode {
            EditorMode::Create => DeckUpsert::Create { title },
            EditorMode::Edit(id) => DeckUpsert::Update { id, title },
        };

        Ok(SavePlan { deck, cards })
    }

    /// Record what reached the store after a save that did not fully succeed.
    ///
    /// The editor switches to edit mode for `deck_id` and newly created cards
    /// are tagged with their ids, so saving again updates instead of duplicating.
    pub fn reconcile(&mut self, deck_id: DeckId, written: &[CardWrite]) {
        self.mode = EditorMode::Edit(deck_id);
        for write in written {
            if let Some(card) = self.cards.get_mut(write.slot) {
                if card.id.is_none() {
                    card.id = Some(write.id);
                }
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
