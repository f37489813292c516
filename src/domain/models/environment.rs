//! 环境与配置键模型

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// `config` 命令允许写入的环境
pub const KNOWN_ENVIRONMENTS: [&str; 3] = ["prod", "stage", "dev"];

/// 未指定 `-e` 时使用的环境
pub const DEFAULT_ENVIRONMENT: &str = "STAGE";

/// 环境名称（大小写不敏感，内部统一小写）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvironmentName(String);

impl EnvironmentName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为 prod/stage/dev 之一
    #[must_use]
    pub fn is_known(&self) -> bool {
        KNOWN_ENVIRONMENTS.contains(&self.0.as_str())
    }
}

impl Default for EnvironmentName {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT)
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EnvironmentName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// `config --for` 的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTarget {
    Unpack,
}

/// 配置存储中的键
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigKey {
    /// `environments.<env>`
    EnvironmentRoot(EnvironmentName),
    /// `unpackPath`
    UnpackRoot,
}

impl ConfigKey {
    pub const ENVIRONMENTS: &'static str = "environments";
    pub const UNPACK_PATH: &'static str = "unpackPath";

    /// 解析 `config` 命令写入的键
    ///
    /// `--for` 优先于 `-e`；未指定 `--for` 时环境必须是已知环境之一。
    pub fn resolve(target: Option<ConfigTarget>, environment: &EnvironmentName) -> Result<Self> {
        match target {
            Some(ConfigTarget::Unpack) => Ok(ConfigKey::UnpackRoot),
            None if environment.is_known() => Ok(ConfigKey::EnvironmentRoot(environment.clone())),
            None => Err(DomainError::UnknownEnvironment(environment.to_string())),
        }
    }

    /// 点分隔的存储路径
    #[must_use]
    pub fn as_path(&self) -> String {
        match self {
            ConfigKey::EnvironmentRoot(env) => format!("{}.{}", Self::ENVIRONMENTS, env),
            ConfigKey::UnpackRoot => Self::UNPACK_PATH.to_string(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

/// 持久化配置的类型化快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub environments: BTreeMap<String, Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpack_path: Option<String>,
}

impl Settings {
    /// 环境的根目录；缺失、null 或空字符串都视为未配置
    #[must_use]
    pub fn base_root(&self, environment: &EnvironmentName) -> Option<&str> {
        self.environments
            .get(environment.as_str())
            .and_then(|root| root.as_deref())
            .filter(|root| !root.trim().is_empty())
    }

    #[must_use]
    pub fn unpack_root(&self) -> Option<&str> {
        self.unpack_path.as_deref().filter(|root| !root.trim().is_empty())
    }
}
