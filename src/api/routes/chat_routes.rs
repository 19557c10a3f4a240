//! Chat Routes
//!
//! 定义聊天相关的 API 路由。

use crate::api::handlers::message_handler::*;
use crate::api::handlers::suggestion_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建聊天路由器
pub fn create_chat_router() -> Router<AppState> {
    Router::new()
        .route("/message", post(send_message))
        .route("/history", get(list_history))
        .route("/suggestions", get(list_suggestions))
        .route("/health-tip", get(health_tip))
}
