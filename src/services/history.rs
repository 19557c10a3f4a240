//! 消息历史服务
//!
//! Append-only in-memory log of incoming messages. Created empty at startup,
//! dropped at shutdown, never persisted. Unbounded.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::Result;
use crate::models::message::Message;

/// 消息历史 trait
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 追加消息
    async fn append(&self, message: Message) -> Result<()>;

    /// 按追加顺序列出所有消息
    async fn list(&self) -> Result<Vec<Message>>;

    /// 消息数量
    async fn count(&self) -> Result<usize>;
}

/// 内存消息历史
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn append(&self, message: Message) -> Result<()> {
        self.messages.write().push(message);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Message>> {
        Ok(self.messages.read().clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.messages.read().len())
    }
}

/// 创建历史存储
pub fn create_history_store() -> Box<dyn HistoryStore> {
    Box::new(InMemoryHistory::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_new_history_is_empty() {
        let history = InMemoryHistory::new();
        assert_eq!(history.count().await.unwrap(), 0);
        assert!(history.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let history = InMemoryHistory::new();
        history.append(Message::new("first", "english")).await.unwrap();
        history.append(Message::new("second", "hindi")).await.unwrap();
        history.append(Message::new("first", "english")).await.unwrap();

        let texts: Vec<String> = history
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.text)
            .collect();

        assert_eq!(texts, vec!["first", "second", "first"]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistory::new());

        let mut handles = Vec::new();
        for i in 0..16 {
            let history = history.clone();
            handles.push(tokio::spawn(async move {
                for j in 0..25 {
                    history
                        .append(Message::new(format!("{}-{}", i, j), "english"))
                        .await
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(history.count().await.unwrap(), 16 * 25);
    }
}
