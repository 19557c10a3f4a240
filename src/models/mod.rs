//! 核心数据模型模块
//!
//! 定义 HealthMate 的核心数据结构：知识条目、接种表、分类结果与消息记录。

pub mod knowledge;
pub mod message;

pub use knowledge::*;
pub use message::*;
