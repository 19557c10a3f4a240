//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod message_handler;
pub mod page_handler;
pub mod suggestion_handler;

pub use message_handler::*;
pub use page_handler::*;
pub use suggestion_handler::*;
