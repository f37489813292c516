//! 解压与打开
//!
//! 解压目录按环境区分：`<unpackPath>/<env>/INSTANCES/<guid>`、
//! `<unpackPath>/<env>/TEMPLATES/<partial path>`。

use crate::domain::error::Result;
use crate::domain::models::{ConfigKey, LogicalPath, ResolutionRequest, ResourceKind};
use crate::domain::repositories::{ArchiveExtractor, Revealer, SettingsRepository};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// 解压步骤的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// 未请求解压
    Archive(PathBuf),
    /// 已解压到目录
    Unpacked(PathBuf),
    /// 请求了解压但没有配置 unpackPath
    MissingUnpackRoot(PathBuf),
}

impl Prepared {
    /// 接下来要打开的路径
    pub fn path(&self) -> &Path {
        match self {
            Prepared::Archive(p) | Prepared::Unpacked(p) | Prepared::MissingUnpackRoot(p) => p,
        }
    }
}

/// 解压与打开服务
pub struct UnpackService {
    settings: Arc<dyn SettingsRepository>,
    extractor: Arc<dyn ArchiveExtractor>,
    revealer: Arc<dyn Revealer>,
}

impl UnpackService {
    pub fn new(
        settings: Arc<dyn SettingsRepository>,
        extractor: Arc<dyn ArchiveExtractor>,
        revealer: Arc<dyn Revealer>,
    ) -> Self {
        Self {
            settings,
            extractor,
            revealer,
        }
    }

    /// 解压目标目录
    pub fn destination(unpack_root: &str, request: &ResolutionRequest) -> PathBuf {
        let mut path = LogicalPath::new(unpack_root)
            .join(request.environment.as_str())
            .join(request.kind.directory());

        match request.kind {
            ResourceKind::Instance => path = path.join(request.identifier.as_str()),
            ResourceKind::Template => {
                for segment in request.identifier.split('/').filter(|s| !s.is_empty()) {
                    path = path.join(segment);
                }
            }
        }
        path.to_native()
    }

    /// 按需解压 `idml_path`
    pub async fn prepare(
        &self,
        request: &ResolutionRequest,
        idml_path: &Path,
        unpack: bool,
    ) -> Result<Prepared> {
        if !unpack {
            return Ok(Prepared::Archive(idml_path.to_path_buf()));
        }

        let Some(unpack_root) = self
            .settings
            .get_key(&ConfigKey::UnpackRoot)
            .filter(|root| !root.trim().is_empty())
        else {
            return Ok(Prepared::MissingUnpackRoot(idml_path.to_path_buf()));
        };

        let destination = Self::destination(&unpack_root, request);
        info!(kind = %request.kind, destination = %destination.display(), "unpacking");
        let unpacked = self.extractor.extract(idml_path, &destination).await?;
        Ok(Prepared::Unpacked(unpacked))
    }

    /// 在文件浏览器中显示
    pub fn reveal(&self, path: &Path) -> Result<String> {
        self.revealer.reveal(path)
    }
}
