//! 测试工具模块
//!
//! 提供临时 IDML 目录树、计数探测器和记录型文件浏览器

use crate::domain::error::Result;
use crate::domain::repositories::{PathProbe, Revealer, SettingsRepository};
use crate::domain::resolver;
use crate::infrastructure::{FsPathProbe, JsonSettingsRepository};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// 记录存在性检查次数的探测器
pub struct CountingProbe {
    calls: AtomicUsize,
    answer: Option<bool>,
}

impl CountingProbe {
    /// 固定返回 `answer`
    pub fn new(answer: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            answer: Some(answer),
        }
    }

    /// 转发到真实文件系统
    pub fn wrapping_fs() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            answer: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PathProbe for CountingProbe {
    async fn exists(&self, path: &Path) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answer {
            Some(answer) => answer,
            None => FsPathProbe.exists(path).await,
        }
    }
}

/// 只记录路径、不启动任何进程的文件浏览器
#[derive(Default)]
pub struct RecordingRevealer {
    revealed: Mutex<Vec<PathBuf>>,
}

impl RecordingRevealer {
    pub fn revealed(&self) -> Vec<PathBuf> {
        self.revealed.lock().unwrap().clone()
    }
}

impl Revealer for RecordingRevealer {
    fn reveal(&self, path: &Path) -> Result<String> {
        self.revealed.lock().unwrap().push(path.to_path_buf());
        Ok(format!("Opened {}", path.display()))
    }
}

/// 临时的环境根目录
pub struct IdmlTree {
    temp_dir: TempDir,
}

impl Default for IdmlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl IdmlTree {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn root_str(&self) -> &str {
        self.root().to_str().unwrap()
    }

    /// 在分片目录下创建实例文件
    pub fn add_instance(&self, guid: &str) -> PathBuf {
        let path = resolver::resolve_instance_path(self.root_str(), guid)
            .unwrap()
            .to_native();
        write_idml(&path);
        path
    }

    /// 在 TEMPLATES 下创建模板文件
    pub fn add_template(&self, partial_path: &str) -> PathBuf {
        let path = resolver::resolve_template_path(self.root_str(), partial_path)
            .unwrap()
            .to_native();
        write_idml(&path);
        path
    }
}

/// 写一个最小的 IDML（zip）文件
pub fn write_idml(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    writer.start_file("designmap.xml", options).unwrap();
    writer.write_all(b"<Document/>").unwrap();
    writer.finish().unwrap();
}

/// 在 `dir` 下创建配置存储并写入给定键值
pub async fn settings_with(dir: &TempDir, pairs: &[(&str, &str)]) -> Arc<dyn SettingsRepository> {
    let repo = JsonSettingsRepository::load(dir.path().join("config.json"))
        .await
        .unwrap();
    for (key, value) in pairs {
        repo.set(key, value).await.unwrap();
    }
    Arc::new(repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counting_probe_counts() {
        let probe = CountingProbe::new(false);
        assert!(!probe.exists(Path::new("/")).await);
        assert!(!probe.exists(Path::new("/")).await);
        assert_eq!(probe.calls(), 2);
    }

    #[test]
    fn tree_creates_sharded_instance() {
        let tree = IdmlTree::new();
        let path = tree.add_instance("abcdef");
        assert!(path.is_file());
        assert!(path.starts_with(tree.root().join("INSTANCES").join("ab1").join("abcdef")));
    }
}
