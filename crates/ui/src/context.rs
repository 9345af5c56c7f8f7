use std::sync::Arc;

use deck_core::model::Identity;
use services::{DeckEditorService, DeckService};

/// What the composition root hands to the views.
pub trait UiApp: Send + Sync {
    fn identity(&self) -> Identity;

    fn deck_service(&self) -> Arc<DeckService>;
    fn editor_service(&self) -> Arc<DeckEditorService>;
}

#[derive(Clone)]
pub struct AppContext {
    identity: Identity,
    deck_service: Arc<DeckService>,
    editor_service: Arc<DeckEditorService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            identity: app.identity(),
            deck_service: app.deck_service(),
            editor_service: app.editor_service(),
        }
    }

    /// The user and subject every remote call is made for.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity.clone()
    }

    #[must_use]
    pub fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    #[must_use]
    pub fn editor_service(&self) -> Arc<DeckEditorService> {
        Arc::clone(&self.editor_service)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
