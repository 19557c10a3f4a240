//! HealthMate - 健康问答助手服务
//!
//! 基于关键词匹配的健康咨询应答服务：将用户消息与静态知识库匹配，
//! 返回预设的健康建议。

pub mod api;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod observability;
pub mod services;
