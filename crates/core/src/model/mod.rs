mod card;
mod deck;
mod identity;
mod ids;

pub use card::{Card, CardDraft};
pub use deck::{Deck, DeckError, DeckTitle};
pub use identity::{Identity, Owner, OwnerError};
pub use ids::{CardId, DeckId, ParseIdError, SubjectId};
