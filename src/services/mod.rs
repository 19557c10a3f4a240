//! 服务模块

pub mod history;
pub mod random;
pub mod responder;
pub mod suggestions;

pub use history::{HistoryStore, InMemoryHistory, create_history_store};
pub use random::{RandomSource, SeededRandom, ThreadRandom, create_random_source};
pub use responder::{Responder, create_responder};
pub use suggestions::SuggestionProvider;
