use crate::observability::AppMetrics;
use crate::services::history::HistoryStore;
use crate::services::responder::Responder;
use crate::services::suggestions::SuggestionProvider;
use std::sync::Arc;

/// Application state shared by all request handlers.
///
/// The history store lives exactly as long as the process: it is created
/// empty here at startup and dropped with the last clone of the state.
#[derive(Clone)]
pub struct AppState {
    /// Keyword responder
    pub responder: Responder,
    /// Append-only message history
    pub history: Arc<dyn HistoryStore>,
    /// Quick suggestions and standalone tips
    pub suggestions: SuggestionProvider,
    /// Classification counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("responder", &self.responder)
            .field("history", &"Arc<dyn HistoryStore>")
            .field("suggestions", &self.suggestions)
            .field("metrics", &"Arc<AppMetrics>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        responder: Responder,
        history: Box<dyn HistoryStore>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            suggestions: SuggestionProvider::new(responder.clone()),
            responder,
            history: Arc::from(history),
            metrics,
        }
    }

    /// Create development application state: thread RNG, empty in-memory history
    pub fn development() -> Self {
        use crate::services::history::create_history_store;
        use crate::services::random::ThreadRandom;

        Self::new(
            Responder::new(Box::new(ThreadRandom)),
            create_history_store(),
            Arc::new(AppMetrics::default()),
        )
    }
}
