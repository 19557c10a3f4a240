//! 配置管理模块
//!
//! 提供应用程序配置加载和管理功能，支持 TOML 配置文件和绑定地址命令行参数。

pub mod cli;
pub mod config;
pub mod loader;
