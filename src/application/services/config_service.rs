//! 配置应用服务

use crate::domain::error::Result;
use crate::domain::models::{ConfigKey, ConfigTarget, EnvironmentName, Settings};
use crate::domain::repositories::SettingsRepository;
use std::sync::Arc;
use tracing::info;

/// 配置服务
pub struct ConfigService {
    settings: Arc<dyn SettingsRepository>,
}

impl ConfigService {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    /// 当前配置
    pub fn show(&self) -> Settings {
        self.settings.snapshot()
    }

    /// 写入环境根目录或解压根目录，返回实际写入的键
    pub async fn set_path(
        &self,
        target: Option<ConfigTarget>,
        environment: &EnvironmentName,
        path: &str,
    ) -> Result<ConfigKey> {
        let key = ConfigKey::resolve(target, environment)?;
        self.settings.set(&key.as_path(), path).await?;
        info!(key = %key, path, "config updated");
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::test_utils::settings_with;

    async fn service_in(dir: &tempfile::TempDir) -> (ConfigService, Arc<dyn SettingsRepository>) {
        let settings = settings_with(dir, &[]).await;
        (ConfigService::new(settings.clone()), settings)
    }

    #[tokio::test]
    async fn sets_environment_root_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let (service, settings) = service_in(&dir).await;

        let key = service
            .set_path(None, &EnvironmentName::new("PROD"), "/mnt/idml")
            .await
            .unwrap();

        assert_eq!(key.as_path(), "environments.prod");
        assert_eq!(
            settings.get_key(&ConfigKey::EnvironmentRoot("Prod".into())).as_deref(),
            Some("/mnt/idml")
        );
        assert_eq!(service.show().base_root(&"prod".into()), Some("/mnt/idml"));
    }

    #[tokio::test]
    async fn for_unpack_ignores_environment() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(settings_with(&dir, &[]).await);

        service
            .set_path(Some(ConfigTarget::Unpack), &"anything".into(), "/tmp/idml")
            .await
            .unwrap();

        assert_eq!(service.show().unpack_root(), Some("/tmp/idml"));
        assert_eq!(service.show().base_root(&"stage".into()), None);
    }

    #[tokio::test]
    async fn unknown_environment_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(settings_with(&dir, &[]).await);

        let err = service
            .set_path(None, &"qa".into(), "/mnt/qa")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::UnknownEnvironment(_)));
        assert_eq!(service.show(), Settings::default());
        assert!(!dir.path().join("config.json").exists());
    }
}
