//! 路径管理工具

use crate::domain::error::{DomainError, Result};
use std::path::{Path, PathBuf};

/// 覆盖配置目录的环境变量
pub const CONFIG_DIR_ENV: &str = "FOX_CONFIG_DIR";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::config_dir()
        .map(|d| d.join("fox"))
        .ok_or_else(|| DomainError::Config("Could not determine config directory".to_string()))
}

/// 获取配置文件路径
pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// 确保文件的父目录存在
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DomainError::Io(format!("{}: {}", parent.display(), e)))?;
    }
    Ok(())
}
