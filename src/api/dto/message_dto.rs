//! 消息 DTO
//!
//! 定义聊天相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::models::message::{DEFAULT_LANGUAGE, Message};

/// 发送消息请求
///
/// Every field is optional on the wire: a missing or null `text` is treated
/// as an empty message and a missing `language` as English.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SendMessageRequest {
    /// 消息文本
    pub text: Option<String>,
    /// 语言
    pub language: Option<String>,
}

impl SendMessageRequest {
    /// Lower-cased message text, empty when absent.
    pub fn normalized_text(&self) -> String {
        self.text.as_deref().unwrap_or_default().to_lowercase()
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// 发送消息响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// 回复文本
    pub response: String,
}

/// 历史记录响应
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// 按接收顺序排列的消息
    pub history: Vec<Message>,
}

/// 快捷建议响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// 健康提示响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthTipResponse {
    pub tip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_for_missing_fields() {
        let request: SendMessageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.normalized_text(), "");
        assert_eq!(request.language(), "english");
    }

    #[test]
    fn test_request_keeps_language() {
        let request: SendMessageRequest =
            serde_json::from_str(r#"{"text":"Fever","language":"hindi"}"#).unwrap();
        assert_eq!(request.normalized_text(), "fever");
        assert_eq!(request.language(), "hindi");
    }

    #[test]
    fn test_request_null_text_is_empty() {
        let request: SendMessageRequest = serde_json::from_str(r#"{"text":null}"#).unwrap();
        assert_eq!(request.normalized_text(), "");
    }
}
