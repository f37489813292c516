//! instance/template 共用的查找 → 解压 → 打开流程

use super::CommandContext;
use crate::application::services::{LocatorService, Prepared, UnpackService};
use crate::domain::error::Result;
use crate::domain::models::{ResolutionRequest, ResourceKind};
use console::style;
use std::path::PathBuf;
use std::sync::Arc;

/// 一次查找流程的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateOutcome {
    pub found: PathBuf,
    pub prepared: Prepared,
    /// 打开文件浏览器后的提示；未打开时为 None
    pub revealed: Option<String>,
}

/// 查找流程
pub struct LocateFlow {
    locator: Arc<LocatorService>,
    unpacker: Arc<UnpackService>,
}

impl LocateFlow {
    pub fn new(locator: Arc<LocatorService>, unpacker: Arc<UnpackService>) -> Self {
        Self { locator, unpacker }
    }

    /// 执行并打印结果
    pub async fn run(
        &self,
        kind: ResourceKind,
        identifier: &str,
        ctx: &CommandContext,
    ) -> Result<LocateOutcome> {
        let request = ResolutionRequest::new(identifier, kind, ctx.environment.clone());
        if ctx.verbose {
            println!("handling {} command {}", kind.to_string().to_uppercase(), identifier);
        }

        let found = self.locator.locate(&request).await?;
        if ctx.verbose {
            println!("{}", style(format!("\nFound IDML file: {}", found.display())).green());
        }

        let prepared = self.unpacker.prepare(&request, &found, ctx.unpack).await?;
        match &prepared {
            Prepared::Unpacked(dir) if ctx.verbose => {
                println!("Unpacked {} to {}", kind, dir.display());
            }
            Prepared::MissingUnpackRoot(_) => {
                eprintln!(
                    "{}",
                    style(format!(
                        "Did not unpack {}! Missing config value for <unpackPath>",
                        kind
                    ))
                    .yellow()
                );
            }
            _ => {}
        }

        if !ctx.reveal {
            println!("{}", prepared.path().display());
            return Ok(LocateOutcome {
                found,
                prepared,
                revealed: None,
            });
        }

        if ctx.verbose {
            println!("Opening {}", prepared.path().display());
        }
        let message = self.unpacker.reveal(prepared.path())?;
        println!("\n{}", style(&message).green());

        Ok(LocateOutcome {
            found,
            prepared,
            revealed: Some(message),
        })
    }
}
