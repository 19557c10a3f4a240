use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Language recorded when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "english";

/// 用户消息记录
///
/// One logged incoming message. Messages are only ever appended to the
/// history store; append order is the ordering authority, `received_at`
/// is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// 小写化后的消息文本
    pub text: String,
    /// 用户选择的语言
    pub language: String,
    /// 接收时间
    pub received_at: DateTime<Utc>,
}

impl Message {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            received_at: Utc::now(),
        }
    }
}
