//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。

pub mod message_dto;

pub use message_dto::*;
