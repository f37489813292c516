//! instance 命令处理器

use super::locate::LocateFlow;
use super::{CommandContext, CommandHandler};
use crate::domain::error::Result;
use crate::domain::models::ResourceKind;
use async_trait::async_trait;

/// instance 命令
pub struct InstanceCommand {
    flow: LocateFlow,
    guid: String,
}

impl InstanceCommand {
    pub fn new(flow: LocateFlow, guid: String) -> Self {
        Self { flow, guid }
    }
}

#[async_trait]
impl CommandHandler for InstanceCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        self.flow
            .run(ResourceKind::Instance, &self.guid, ctx)
            .await
            .map(|_| ())
    }
}
