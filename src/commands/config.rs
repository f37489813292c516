//! config 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::ConfigService;
use crate::domain::error::Result;
use crate::domain::models::{ConfigKey, ConfigTarget};
use async_trait::async_trait;
use std::sync::Arc;

/// config 命令：无参数时打印配置，否则写入
pub struct ConfigCommand {
    config_service: Arc<ConfigService>,
    path: Option<String>,
    target: Option<ConfigTarget>,
}

impl ConfigCommand {
    pub fn new(
        config_service: Arc<ConfigService>,
        path: Option<String>,
        target: Option<ConfigTarget>,
    ) -> Self {
        Self {
            config_service,
            path,
            target,
        }
    }
}

#[async_trait]
impl CommandHandler for ConfigCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let Some(path) = &self.path else {
            let settings = self.config_service.show();
            println!("Current config: {}", serde_json::to_string_pretty(&settings)?);
            return Ok(());
        };

        let key = self
            .config_service
            .set_path(self.target, &ctx.environment, path)
            .await?;

        if ctx.verbose {
            match &key {
                ConfigKey::EnvironmentRoot(env) => println!(
                    "Setting new base path for {}: {}",
                    env.as_str().to_uppercase(),
                    path
                ),
                ConfigKey::UnpackRoot => println!("Setting new unpackPath: {}", path),
            }
        }
        Ok(())
    }
}
