//! Quick suggestions and standalone health tips for the chat page.

use crate::knowledge::SUGGESTIONS;
use crate::services::responder::Responder;

/// 建议服务
#[derive(Debug, Clone)]
pub struct SuggestionProvider {
    responder: Responder,
}

impl SuggestionProvider {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }

    /// Static quick-suggestion list, in display order.
    pub fn suggestions(&self) -> Vec<String> {
        SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }

    pub fn health_tip(&self) -> String {
        self.responder.random_tip().to_string()
    }
}
