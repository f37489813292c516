//! 资源请求与逻辑路径模型

use super::environment::EnvironmentName;
use std::fmt;
use std::path::PathBuf;

/// 资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Instance,
    Template,
}

impl ResourceKind {
    /// 环境根目录下的子目录名
    #[must_use]
    pub fn directory(&self) -> &'static str {
        match self {
            ResourceKind::Instance => "INSTANCES",
            ResourceKind::Template => "TEMPLATES",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Instance => write!(f, "instance"),
            ResourceKind::Template => write!(f, "template"),
        }
    }
}

/// 一次查找请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub identifier: String,
    pub kind: ResourceKind,
    pub environment: EnvironmentName,
}

impl ResolutionRequest {
    #[must_use]
    pub fn new(identifier: impl Into<String>, kind: ResourceKind, environment: EnvironmentName) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            environment,
        }
    }

    #[must_use]
    pub fn instance(guid: impl Into<String>, environment: EnvironmentName) -> Self {
        Self::new(guid, ResourceKind::Instance, environment)
    }

    #[must_use]
    pub fn template(partial_path: impl Into<String>, environment: EnvironmentName) -> Self {
        Self::new(partial_path, ResourceKind::Template, environment)
    }
}

/// 以 `/` 分隔的逻辑路径，只在 I/O 边界转换为本地路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalPath {
    root: String,
    segments: Vec<String>,
}

impl LogicalPath {
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// 去掉末尾 `/` 或 `\` 的根目录（根本身为 `/` 时保留）
    #[must_use]
    pub fn root(&self) -> &str {
        let trimmed = self.root.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() && !self.root.is_empty() {
            &self.root[..1]
        } else {
            trimmed
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// 本地文件系统路径
    #[must_use]
    pub fn to_native(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.root);
        for segment in &self.segments {
            path.push(segment);
        }
        path
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = self.root().to_string();
        for segment in &self.segments {
            if !out.is_empty() && !out.ends_with('/') {
                out.push('/');
            }
            out.push_str(segment);
        }
        write!(f, "{}", out)
    }
}
