use std::sync::Arc;

use tracing::error;

use quiz_core::model::{QuestionStore, QuizSettings};
use storage::{LoadError, SourceRef};

use crate::map_adapter::MapSurface;
use crate::session::QuizSession;

/// Loads the question store and builds sessions from it.
#[derive(Clone)]
pub struct QuizLoader {
    source: SourceRef,
    settings: QuizSettings,
}

impl QuizLoader {
    #[must_use]
    pub fn new(source: SourceRef, settings: QuizSettings) -> Self {
        Self { source, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn source_location(&self) -> String {
        self.source.describe()
    }

    /// Fetch and index the question document.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is unreachable or malformed.
    pub async fn load_store(&self) -> Result<Arc<QuestionStore>, LoadError> {
        storage::load(self.source.as_ref())
            .await
            .map(Arc::new)
            .inspect_err(|err| error!(error = %err, "failed to load question data"))
    }

    /// Create the session for an already loaded store and configure `surface`.
    #[must_use]
    pub fn session(&self, store: Arc<QuestionStore>, surface: Box<dyn MapSurface>) -> QuizSession {
        QuizSession::new(store, self.settings.clone(), surface)
    }

    /// Load the store, then build the session. The surface is only touched on success.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if loading fails; no session is created in that case.
    pub async fn start(&self, surface: Box<dyn MapSurface>) -> Result<QuizSession, LoadError> {
        let store = self.load_store().await?;
        Ok(self.session(store, surface))
    }
}
