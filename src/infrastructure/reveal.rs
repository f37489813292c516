//! 调用系统文件浏览器
//!
//! - Windows: `explorer /select,<file>` 或 `explorer <dir>`
//! - macOS: `open -R <file>` 或 `open <dir>`
//! - Linux: `xdg-open <dir>`（文件取其所在目录）

use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::Revealer;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// 系统文件浏览器
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRevealer;

impl SystemRevealer {
    /// 要执行的程序与参数
    pub fn command_for(path: &Path) -> (String, Vec<String>) {
        let is_dir = path.is_dir();

        if cfg!(target_os = "windows") {
            let arg = if is_dir {
                path.display().to_string()
            } else {
                format!("/select,{}", path.display())
            };
            ("explorer".to_string(), vec![arg])
        } else if cfg!(target_os = "macos") {
            let mut args = Vec::new();
            if !is_dir {
                args.push("-R".to_string());
            }
            args.push(path.display().to_string());
            ("open".to_string(), args)
        } else {
            let target = if is_dir {
                path.to_path_buf()
            } else {
                path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
            };
            ("xdg-open".to_string(), vec![target.display().to_string()])
        }
    }
}

impl Revealer for SystemRevealer {
    fn reveal(&self, path: &Path) -> Result<String> {
        let (program, args) = Self::command_for(path);
        debug!(program = %program, ?args, "opening file browser");

        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DomainError::Reveal(format!("{}: {}", program, e)))?;

        // 不等待文件浏览器退出
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(format!("Opened {}", path.display()))
    }
}
