#[derive(Clone, Debug)]
pub enum EditorIntent {
    SetTitle(String),
    EditFront(String),
    EditBack(String),
    Flip,
    Prev,
    Next,
    AddCard,
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
    Save,
}
