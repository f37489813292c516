//! 文件存储实现
//!
//! 整个配置是一个 JSON 文档，键是点分隔路径（`environments.prod`），
//! 每次写入都会把完整文档落盘。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{ConfigKey, KNOWN_ENVIRONMENTS, Settings};
use crate::domain::repositories::SettingsRepository;
use crate::infrastructure::paths;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::debug;

/// JSON 文件配置存储
pub struct JsonSettingsRepository {
    path: PathBuf,
    document: RwLock<Value>,
}

impl JsonSettingsRepository {
    /// 从默认配置文件加载
    pub async fn load_default() -> Result<Self> {
        Self::load(paths::get_config_file()?).await
    }

    /// 加载指定文件；文件不存在时为空文档
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let document = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Value::Object(Map::new()),
            Ok(content) => {
                let value: Value = serde_json::from_str(&content).map_err(|e| {
                    DomainError::Config(format!("{} is not valid JSON: {}", path.display(), e))
                })?;
                if !value.is_object() {
                    return Err(DomainError::Config(format!(
                        "{} must contain a JSON object",
                        path.display()
                    )));
                }
                value
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, starting empty");
                Value::Object(Map::new())
            }
            Err(e) => {
                return Err(DomainError::Io(format!("{}: {}", path.display(), e)));
            }
        };

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    #[cfg(test)]
    fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// 首次写入时补齐已知环境
    fn seed_environments(document: &mut Value) {
        if document.get(ConfigKey::ENVIRONMENTS).is_none()
            && let Some(obj) = document.as_object_mut()
        {
            let envs = KNOWN_ENVIRONMENTS
                .iter()
                .map(|env| (env.to_string(), Value::Null))
                .collect::<Map<_, _>>();
            obj.insert(ConfigKey::ENVIRONMENTS.to_string(), Value::Object(envs));
        }
    }

    async fn persist(&self, content: String) -> Result<()> {
        paths::ensure_parent_dir(&self.path).await?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| DomainError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

/// 按点分隔路径读取
fn lookup<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(document, |node, segment| node.as_object()?.get(segment))
}

/// 按点分隔路径写入，中间节点不是对象时会被替换
fn insert(document: &mut Value, key: &str, value: Value) {
    let mut node = document;
    let mut segments = key.split('.').peekable();

    while let Some(segment) = segments.next() {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let Some(obj) = node.as_object_mut() else {
            return;
        };

        if segments.peek().is_none() {
            obj.insert(segment.to_string(), value);
            return;
        }
        node = obj
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepository {
    fn get(&self, key: &str) -> Option<String> {
        let document = self.document.read().ok()?;
        lookup(&document, key)?.as_str().map(str::to_string)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let content = {
            let mut document = self
                .document
                .write()
                .map_err(|_| DomainError::Config("config lock poisoned".to_string()))?;
            Self::seed_environments(&mut document);
            insert(&mut document, key, Value::String(value.to_string()));
            serde_json::to_string_pretty(&*document)?
        };

        debug!(key, value, path = %self.path.display(), "persisting config");
        self.persist(content).await
    }

    /// 逐字段读取；非字符串的值按未配置处理，不影响其他字段
    fn snapshot(&self) -> Settings {
        let Ok(document) = self.document.read() else {
            return Settings::default();
        };

        let environments = lookup(&document, ConfigKey::ENVIRONMENTS)
            .and_then(Value::as_object)
            .map(|envs| {
                envs.iter()
                    .map(|(name, root)| {
                        if !root.is_null() && !root.is_string() {
                            debug!(environment = %name, "ignoring non-string base path");
                        }
                        (name.clone(), root.as_str().map(str::to_string))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Settings {
            environments,
            unpack_path: lookup(&document, ConfigKey::UNPACK_PATH)
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EnvironmentName;
    use tempfile::TempDir;

    async fn repo_in(dir: &TempDir) -> JsonSettingsRepository {
        JsonSettingsRepository::load(dir.path().join(paths::CONFIG_FILE_NAME))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;
        assert_eq!(repo.get("environments.prod"), None);
        assert_eq!(repo.get("unpackPath"), None);
        assert_eq!(repo.snapshot(), Settings::default());
    }

    #[tokio::test]
    async fn set_then_get_case_insensitive_environment() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;

        let key = ConfigKey::resolve(None, &EnvironmentName::new("prod")).unwrap();
        repo.set(&key.as_path(), "/mnt/idml").await.unwrap();

        let read_key = ConfigKey::EnvironmentRoot(EnvironmentName::new("PROD"));
        assert_eq!(repo.get_key(&read_key).as_deref(), Some("/mnt/idml"));
        assert_eq!(
            repo.snapshot().base_root(&EnvironmentName::new("PROD")),
            Some("/mnt/idml")
        );
    }

    #[tokio::test]
    async fn writes_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = repo_in(&dir).await;
            repo.set("environments.stage", r"\\10.10.141.30\Publish\IDS\")
                .await
                .unwrap();
            repo.set("unpackPath", "/tmp/idml").await.unwrap();
        }

        let repo = repo_in(&dir).await;
        assert_eq!(
            repo.get("environments.stage").as_deref(),
            Some(r"\\10.10.141.30\Publish\IDS\")
        );
        assert_eq!(repo.get("unpackPath").as_deref(), Some("/tmp/idml"));
    }

    #[tokio::test]
    async fn first_write_seeds_known_environments() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;
        repo.set("unpackPath", "/tmp/idml").await.unwrap();

        let content = std::fs::read_to_string(repo.path()).unwrap();
        let doc: Value = serde_json::from_str(&content).unwrap();
        for env in KNOWN_ENVIRONMENTS {
            assert_eq!(doc["environments"][env], Value::Null);
        }
        assert_eq!(doc["unpackPath"], "/tmp/idml");
        assert_eq!(repo.snapshot().base_root(&EnvironmentName::new("dev")), None);
    }

    #[tokio::test]
    async fn null_values_read_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(paths::CONFIG_FILE_NAME),
            r#"{"environments": {"prod": null, "dev": "/mnt/dev"}}"#,
        )
        .unwrap();

        let repo = repo_in(&dir).await;
        assert_eq!(repo.get("environments.prod"), None);
        assert_eq!(repo.get("environments.dev").as_deref(), Some("/mnt/dev"));
        assert_eq!(repo.get("environments"), None);
    }

    #[tokio::test]
    async fn mixed_type_values_keep_valid_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(paths::CONFIG_FILE_NAME),
            r#"{"environments": {"prod": "/mnt/p", "stage": 5}, "unpackPath": "/u"}"#,
        )
        .unwrap();

        let repo = repo_in(&dir).await;
        let settings = repo.snapshot();
        assert_eq!(settings.unpack_root(), Some("/u"));
        assert_eq!(settings.base_root(&EnvironmentName::new("prod")), Some("/mnt/p"));
        assert_eq!(settings.base_root(&EnvironmentName::new("stage")), None);
        assert_eq!(repo.get("environments.stage"), None);
    }

    #[tokio::test]
    async fn scalar_environments_keeps_unpack_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(paths::CONFIG_FILE_NAME),
            r#"{"environments": "oops", "unpackPath": "/u"}"#,
        )
        .unwrap();

        let settings = repo_in(&dir).await.snapshot();
        assert!(settings.environments.is_empty());
        assert_eq!(settings.unpack_root(), Some("/u"));
    }

    #[tokio::test]
    async fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(paths::CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonSettingsRepository::load(&path).await.err().unwrap();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn insert_replaces_scalar_parents() {
        let mut doc = serde_json::json!({ "environments": "oops" });
        insert(&mut doc, "environments.prod", Value::String("/p".into()));
        assert_eq!(lookup(&doc, "environments.prod").unwrap(), "/p");
    }
}
