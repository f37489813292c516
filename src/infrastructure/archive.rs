//! zip 解压实现
//!
//! IDML 是 zip 容器，直接按 zip 解压。

use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::ArchiveExtractor;
use async_trait::async_trait;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// zip 解压器
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipExtractor;

impl ZipExtractor {
    /// 同步解压，返回写出的文件数
    pub fn extract_blocking(archive: &Path, destination: &Path) -> Result<usize> {
        let file = File::open(archive)
            .map_err(|e| DomainError::Extraction(format!("{}: {}", archive.display(), e)))?;
        let mut zip = zip::ZipArchive::new(file).map_err(|e| {
            DomainError::Extraction(format!("{} is not a valid archive: {}", archive.display(), e))
        })?;

        std::fs::create_dir_all(destination).map_err(|e| {
            DomainError::Extraction(format!("{}: {}", destination.display(), e))
        })?;

        let mut written = 0;
        for i in 0..zip.len() {
            let mut entry = zip
                .by_index(i)
                .map_err(|e| DomainError::Extraction(format!("entry {}: {}", i, e)))?;

            let Some(relative) = entry.enclosed_name() else {
                warn!(name = entry.name(), "skipping entry outside destination");
                continue;
            };
            let out_path = destination.join(relative);

            if entry.is_dir() {
                std::fs::create_dir_all(&out_path).map_err(|e| {
                    DomainError::Extraction(format!("{}: {}", out_path.display(), e))
                })?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DomainError::Extraction(format!("{}: {}", parent.display(), e))
                })?;
            }

            let mut out = File::create(&out_path)
                .map_err(|e| DomainError::Extraction(format!("{}: {}", out_path.display(), e)))?;
            std::io::copy(&mut entry, &mut out)
                .map_err(|e| DomainError::Extraction(format!("{}: {}", out_path.display(), e)))?;
            written += 1;
        }

        Ok(written)
    }
}

#[async_trait]
impl ArchiveExtractor for ZipExtractor {
    async fn extract(&self, archive: &Path, destination: &Path) -> Result<PathBuf> {
        let archive_owned = archive.to_path_buf();
        let destination_owned = destination.to_path_buf();

        let written = tokio::task::spawn_blocking(move || {
            Self::extract_blocking(&archive_owned, &destination_owned)
        })
        .await
        .map_err(|e| DomainError::Extraction(format!("extraction task failed: {}", e)))??;

        debug!(
            archive = %archive.display(),
            destination = %destination.display(),
            files = written,
            "archive extracted"
        );
        Ok(destination.to_path_buf())
    }
}
