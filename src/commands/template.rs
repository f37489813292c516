//! template 命令处理器

use super::locate::LocateFlow;
use super::{CommandContext, CommandHandler};
use crate::domain::error::Result;
use crate::domain::models::ResourceKind;
use async_trait::async_trait;

/// template 命令
pub struct TemplateCommand {
    flow: LocateFlow,
    path: String,
}

impl TemplateCommand {
    pub fn new(flow: LocateFlow, path: String) -> Self {
        Self { flow, path }
    }
}

#[async_trait]
impl CommandHandler for TemplateCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        self.flow
            .run(ResourceKind::Template, &self.path, ctx)
            .await
            .map(|_| ())
    }
}
