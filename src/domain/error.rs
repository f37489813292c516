//! 领域层错误类型

use console::style;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DomainError {
    #[error("Invalid identifier: {0}")]
    #[diagnostic(
        code(fox::invalid_identifier),
        help("Instances take a GUID, templates take a partial path like 61/VITEC_DEMO/Name")
    )]
    InvalidIdentifier(String),

    #[error("No base path configured for environment \"{0}\"")]
    #[diagnostic(
        code(fox::unconfigured_environment),
        help("Set one with 'fox config <path> -e <environment>'")
    )]
    UnconfiguredEnvironment(String),

    #[error("Base path {} was not found. Wrong VPN maybe?", .0.display())]
    #[diagnostic(
        code(fox::environment_unreachable),
        help("Check that the network share is mounted and reachable")
    )]
    EnvironmentUnreachable(PathBuf),

    #[error("Path \"{}\" does not exist", .0.display())]
    #[diagnostic(code(fox::resource_not_found))]
    ResourceNotFound(PathBuf),

    #[error("Did not find a known environment: \"{0}\". No value set.")]
    #[diagnostic(code(fox::unknown_environment), help("Known environments: prod, stage, dev"))]
    UnknownEnvironment(String),

    #[error("Extraction failed: {0}")]
    #[diagnostic(code(fox::extraction))]
    Extraction(String),

    #[error("Could not open file browser: {0}")]
    #[diagnostic(code(fox::reveal))]
    Reveal(String),

    #[error("Config error: {0}")]
    #[diagnostic(code(fox::config))]
    Config(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(fox::io))]
    Io(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(fox::serialization))]
    Serialization(String),
}

impl DomainError {
    /// 报告错误，verbose 时附带诊断提示
    pub fn report(&self, verbose: bool) {
        eprintln!(
            "\n{}",
            style(format!("An error occurred! ({})", self)).red()
        );

        if verbose {
            if let Some(code) = self.code() {
                eprintln!("  code: {}", code);
            }
            if let Some(help) = self.help() {
                eprintln!("  help: {}", help);
            }
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
