//! 可用性检查

use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::PathProbe;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// 区分“环境根目录不可达”和“资源不存在”
pub struct AvailabilityChecker {
    probe: Arc<dyn PathProbe>,
}

impl AvailabilityChecker {
    pub fn new(probe: Arc<dyn PathProbe>) -> Self {
        Self { probe }
    }

    /// 环境根目录是否可达（常见失败原因是网络共享未挂载）
    pub async fn check_root_reachable(&self, base_path: &Path) -> Result<()> {
        if self.probe.exists(base_path).await {
            debug!(root = %base_path.display(), "environment root reachable");
            Ok(())
        } else {
            Err(DomainError::EnvironmentUnreachable(base_path.to_path_buf()))
        }
    }

    /// 资源文件是否存在
    pub async fn check_resource_exists(&self, path: &Path) -> Result<()> {
        if self.probe.exists(path).await {
            Ok(())
        } else {
            Err(DomainError::ResourceNotFound(path.to_path_buf()))
        }
    }
}
