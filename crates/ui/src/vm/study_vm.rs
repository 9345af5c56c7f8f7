use deck_core::CardCursor;
use deck_core::model::Card;

/// What the study view shows for the card under the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyCardVm {
    pub position_label: String,
    pub face_label: &'static str,
    pub text: String,
    pub can_prev: bool,
    pub can_next: bool,
}

/// `None` when the deck has no cards.
#[must_use]
pub fn build_study_card(cards: &[Card], cursor: CardCursor) -> Option<StudyCardVm> {
    let card = cards.get(cursor.index())?;
    let (face_label, text) = if cursor.is_flipped() {
        ("Back", card.back())
    } else {
        ("Front", card.front())
    };
    Some(StudyCardVm {
        position_label: format!("Card {} of {}", cursor.index() + 1, cards.len()),
        face_label,
        text: text.to_string(),
        can_prev: cursor.has_prev(),
        can_next: cursor.has_next(cards.len()),
    })
}
