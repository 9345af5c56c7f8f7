use deck_core::model::{Deck, DeckId};

/// UI-ready representation of a deck for the deck list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckRowVm {
    pub id: DeckId,
    pub title: String,
    pub avatar: String,
}

/// Convert domain decks into list rows, keeping store order.
#[must_use]
pub fn map_deck_rows(decks: &[Deck]) -> Vec<DeckRowVm> {
    decks
        .iter()
        .map(|deck| {
            let title = deck.title().trim();
            let avatar = title
                .chars()
                .next()
                .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().to_string());
            DeckRowVm {
                id: deck.id(),
                title: deck.title().to_string(),
                avatar,
            }
        })
        .collect()
}
