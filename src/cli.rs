//! CLI 参数定义

use crate::commands::CommandContext;
use crate::domain::models::{ConfigTarget, DEFAULT_ENVIRONMENT, EnvironmentName};
use clap::{Parser, Subcommand, ValueEnum};

/// fox - 按 GUID 或模板路径定位 IDML 文件
#[derive(Parser, Debug)]
#[command(
    name = "fox",
    version,
    about = "Locates IDML instances and templates",
    long_about = "Resolves an instance GUID or a template partial path to the IDML file \
                  under the configured environment root, optionally unpacks it and opens \
                  it in the file browser"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 环境 (prod/stage/dev)
    #[arg(
        short,
        long,
        visible_alias = "env",
        default_value = DEFAULT_ENVIRONMENT,
        global = true
    )]
    pub environment: String,

    /// 解压到 unpackPath 后打开解压目录
    #[arg(short, long, global = true)]
    pub unpack: bool,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 只打印路径，不打开文件浏览器
    #[arg(long, global = true)]
    pub no_reveal: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locates an *instance* from GUID
    #[command(after_help = "Examples:\n  \
        fox instance 6607e477-326b-4713-b520-596701d25e20\n  \
        fox instance 1ae6a737-442a-4fea-a4c1-40f91db5038a -e PROD")]
    Instance {
        /// Instance GUID
        guid: String,
    },

    /// Locates a *template* from Template partial path
    #[command(after_help = "Examples:\n  \
        fox template 61/VITEC_DEMO/Generell_salgsoppgavemal\n  \
        fox template 1/Aktiv/Salgsoppgave_OneClick/Salgsoppgave -e dev -v -u")]
    Template {
        /// Template partial path
        path: String,
    },

    /// Set (or get) base path for environment
    #[command(after_help = "Examples:\n  \
        fox config\n  \
        fox config \\\\10.10.141.30\\Publish\\IDS\\\n  \
        fox config C:\\TEMP\\idml --for unpack")]
    Config {
        /// New base path; omit to print the current config
        path: Option<String>,

        /// Set the path for something other than an environment
        #[arg(long = "for", value_enum)]
        target: Option<ForTarget>,
    },
}

/// `--for` 可选值
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForTarget {
    Unpack,
}

impl From<ForTarget> for ConfigTarget {
    fn from(target: ForTarget) -> Self {
        match target {
            ForTarget::Unpack => ConfigTarget::Unpack,
        }
    }
}

impl Cli {
    /// 全局参数转为命令上下文
    pub fn context(&self) -> CommandContext {
        CommandContext {
            verbose: self.verbose,
            environment: EnvironmentName::new(&self.environment),
            unpack: self.unpack,
            reveal: !self.no_reveal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_stage() {
        let cli = Cli::try_parse_from(["fox", "instance", "6607e477"]).unwrap();
        let ctx = cli.context();
        assert_eq!(ctx.environment.as_str(), "stage");
        assert!(ctx.reveal);
        assert!(!ctx.unpack);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fox",
            "template",
            "1/Aktiv/Salgsoppgave",
            "-e",
            "dev",
            "-v",
            "-u",
            "--no-reveal",
        ])
        .unwrap();
        let ctx = cli.context();
        assert_eq!(ctx.environment.as_str(), "dev");
        assert!(ctx.verbose && ctx.unpack && !ctx.reveal);
        assert!(matches!(cli.command, Commands::Template { ref path } if path == "1/Aktiv/Salgsoppgave"));
    }

    #[test]
    fn env_alias_is_accepted() {
        let cli = Cli::try_parse_from(["fox", "--env", "PROD", "config"]).unwrap();
        assert_eq!(cli.context().environment.as_str(), "prod");
    }

    #[test]
    fn config_for_unpack() {
        let cli = Cli::try_parse_from(["fox", "config", "/tmp/idml", "--for", "unpack"]).unwrap();
        match cli.command {
            Commands::Config { path, target } => {
                assert_eq!(path.as_deref(), Some("/tmp/idml"));
                assert_eq!(target.map(ConfigTarget::from), Some(ConfigTarget::Unpack));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_for_rejects_unknown_target() {
        assert!(Cli::try_parse_from(["fox", "config", "/tmp", "--for", "hmm"]).is_err());
    }
}
