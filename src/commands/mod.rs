//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait

use crate::domain::error::Result;
use crate::domain::models::EnvironmentName;
use async_trait::async_trait;

pub mod config;
pub mod instance;
pub mod locate;
pub mod template;

pub use config::ConfigCommand;
pub use instance::InstanceCommand;
pub use template::TemplateCommand;

/// 命令上下文（全局参数）
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub verbose: bool,
    pub environment: EnvironmentName,
    pub unpack: bool,
    /// false 时只打印路径，不打开文件浏览器
    pub reveal: bool,
}

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// 执行命令
    async fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
