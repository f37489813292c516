//! fox - IDML 定位工具
//!
//! 按实例 GUID 或模板部分路径，在各环境的目录树中定位 IDML 文件，
//! 可选解压并在文件浏览器中打开。

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub(crate) mod test_utils;

// 重新导出常用类型
pub use domain::{DomainError, EnvironmentName, ResolutionRequest, ResourceKind, Result};
