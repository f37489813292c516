//! 查找服务
//!
//! 流程：读取环境根目录 → 检查根目录可达 → 计算候选路径 → 检查文件存在。
//! 任一步失败立即返回，不重试。

use super::availability::AvailabilityChecker;
use crate::domain::error::{DomainError, Result};
use crate::domain::models::{ConfigKey, EnvironmentName, ResolutionRequest};
use crate::domain::repositories::{PathProbe, SettingsRepository};
use crate::domain::resolver;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// 查找选项
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    pub environment: EnvironmentName,
}

impl LookupOptions {
    pub fn new(environment: impl Into<EnvironmentName>) -> Self {
        Self {
            environment: environment.into(),
        }
    }
}

/// 查找服务
pub struct LocatorService {
    settings: Arc<dyn SettingsRepository>,
    checker: AvailabilityChecker,
}

impl LocatorService {
    pub fn new(settings: Arc<dyn SettingsRepository>, probe: Arc<dyn PathProbe>) -> Self {
        Self {
            settings,
            checker: AvailabilityChecker::new(probe),
        }
    }

    /// 按 GUID 查找实例
    pub async fn locate_instance(&self, guid: &str, options: &LookupOptions) -> Result<PathBuf> {
        self.locate(&ResolutionRequest::instance(guid, options.environment.clone()))
            .await
    }

    /// 按部分路径查找模板
    pub async fn locate_template(
        &self,
        partial_path: &str,
        options: &LookupOptions,
    ) -> Result<PathBuf> {
        self.locate(&ResolutionRequest::template(
            partial_path,
            options.environment.clone(),
        ))
        .await
    }

    /// 执行一次查找，返回已确认存在的文件路径
    pub async fn locate(&self, request: &ResolutionRequest) -> Result<PathBuf> {
        let base_root = self.base_root(&request.environment)?;

        self.checker
            .check_root_reachable(Path::new(&base_root))
            .await?;

        let candidate = resolver::resolve(&base_root, request)?;
        debug!(kind = %request.kind, candidate = %candidate, "resolved candidate path");

        let path = candidate.to_native();
        self.checker.check_resource_exists(&path).await?;

        info!(kind = %request.kind, path = %path.display(), "found idml file");
        Ok(path)
    }

    /// 环境的根目录；未配置或为空时报错
    fn base_root(&self, environment: &EnvironmentName) -> Result<String> {
        self.settings
            .get_key(&ConfigKey::EnvironmentRoot(environment.clone()))
            .filter(|root| !root.trim().is_empty())
            .ok_or_else(|| DomainError::UnconfiguredEnvironment(environment.to_string()))
    }
}
