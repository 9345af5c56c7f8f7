mod actions;
pub(crate) mod state;
mod view;

pub use view::DeckEditorModal;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod intent_smoke;
