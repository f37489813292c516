//! 存储接口与外部协作者定义（输出端口）

use crate::domain::error::Result;
use crate::domain::models::{ConfigKey, Settings};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// 配置存储接口
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// 读取点分隔键对应的字符串值，从不失败
    fn get(&self, key: &str) -> Option<String>;

    /// 写入并立即持久化
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// 当前配置的类型化快照
    fn snapshot(&self) -> Settings;

    /// 按配置键读取
    fn get_key(&self, key: &ConfigKey) -> Option<String> {
        self.get(&key.as_path())
    }
}

/// 文件系统存在性探测
#[async_trait]
pub trait PathProbe: Send + Sync {
    /// 路径是否存在；无法访问视为不存在
    async fn exists(&self, path: &Path) -> bool;
}

/// 归档解压
#[async_trait]
pub trait ArchiveExtractor: Send + Sync {
    /// 把 `archive` 解压到 `destination`（不存在则创建），返回 `destination`
    async fn extract(&self, archive: &Path, destination: &Path) -> Result<PathBuf>;
}

/// 在文件浏览器中显示路径
pub trait Revealer: Send + Sync {
    /// 成功时返回给用户的提示信息
    fn reveal(&self, path: &Path) -> Result<String>;
}
