//! 文件系统存在性探测

use crate::domain::repositories::PathProbe;
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// 基于 tokio::fs 的探测
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathProbe;

#[async_trait]
impl PathProbe for FsPathProbe {
    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::try_exists(path).await {
            Ok(exists) => exists,
            Err(e) => {
                // 未挂载和权限不足在这里不做区分
                debug!(path = %path.display(), error = %e, "existence check failed");
                false
            }
        }
    }
}
