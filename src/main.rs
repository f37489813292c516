//! fox 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 错误处理：任何失败都打印提示并以状态码 1 退出，通过 --verbose 查看诊断信息

use clap::Parser;
use console::style;
use fox::app::{AppConfig, Application};
use fox::cli::Cli;
use fox::domain::DomainError;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = cli.context();

    // 加载配置并组装服务
    let app = match Application::new(AppConfig::default()).await {
        Ok(app) => app,
        Err(e) => {
            match e.downcast_ref::<DomainError>() {
                Some(err) => err.report(ctx.verbose),
                None => eprintln!("{}", style(format!("\nAn error occurred! ({:#})", e)).red()),
            }
            std::process::exit(1);
        }
    };

    // 执行命令，统一错误处理
    let handler = app.handler(cli.command);
    if let Err(e) = handler.execute(&ctx).await {
        e.report(ctx.verbose);
        std::process::exit(1);
    }
}

/// 初始化日志：RUST_LOG 优先，否则 --verbose 时输出 debug
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "fox=debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
