//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体
//! - resolver: 纯路径映射规则
//! - repositories: 存储与外部协作者接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod repositories;
pub mod resolver;

pub use error::{DomainError, Result};
pub use models::{EnvironmentName, ResolutionRequest, ResourceKind, Settings};
pub use repositories::{ArchiveExtractor, PathProbe, Revealer, SettingsRepository};
