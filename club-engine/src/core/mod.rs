//! 核心模块 - 运行配置
//!
//! - [`Config`] - 命令行 / 环境变量配置

pub mod config;

pub use config::Config;
