//! 应用程序容器
//!
//! 负责依赖注入：配置只在启动时加载一次，之后以参数形式传递

use crate::application::services::{ConfigService, LocatorService, UnpackService};
use crate::cli::Commands;
use crate::commands::locate::LocateFlow;
use crate::commands::{CommandHandler, ConfigCommand, InstanceCommand, TemplateCommand};
use crate::domain::repositories::{ArchiveExtractor, PathProbe, Revealer, SettingsRepository};
use crate::infrastructure::{FsPathProbe, JsonSettingsRepository, SystemRevealer, ZipExtractor};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// 配置文件路径；None 时使用默认位置
    pub config_file: Option<PathBuf>,
}

/// 应用程序容器
pub struct Application {
    pub locator: Arc<LocatorService>,
    pub unpacker: Arc<UnpackService>,
    pub config_service: Arc<ConfigService>,
}

impl Application {
    /// 使用真实文件系统、zip 解压和系统文件浏览器
    pub async fn new(config: AppConfig) -> Result<Self> {
        let settings: Arc<dyn SettingsRepository> = match &config.config_file {
            Some(path) => Arc::new(JsonSettingsRepository::load(path).await?),
            None => Arc::new(JsonSettingsRepository::load_default().await?),
        };

        Ok(Self::with_parts(
            settings,
            Arc::new(FsPathProbe),
            Arc::new(ZipExtractor),
            Arc::new(SystemRevealer),
        ))
    }

    /// 注入自定义协作者
    pub fn with_parts(
        settings: Arc<dyn SettingsRepository>,
        probe: Arc<dyn PathProbe>,
        extractor: Arc<dyn ArchiveExtractor>,
        revealer: Arc<dyn Revealer>,
    ) -> Self {
        let locator = Arc::new(LocatorService::new(settings.clone(), probe));
        let unpacker = Arc::new(UnpackService::new(settings.clone(), extractor, revealer));
        let config_service = Arc::new(ConfigService::new(settings));

        Self {
            locator,
            unpacker,
            config_service,
        }
    }

    /// 根据子命令构造处理器
    pub fn handler(&self, command: Commands) -> Box<dyn CommandHandler> {
        match command {
            Commands::Instance { guid } => Box::new(InstanceCommand::new(self.flow(), guid)),
            Commands::Template { path } => Box::new(TemplateCommand::new(self.flow(), path)),
            Commands::Config { path, target } => Box::new(ConfigCommand::new(
                self.config_service.clone(),
                path,
                target.map(Into::into),
            )),
        }
    }

    fn flow(&self) -> LocateFlow {
        LocateFlow::new(self.locator.clone(), self.unpacker.clone())
    }
}
