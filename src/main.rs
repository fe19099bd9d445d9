use anyhow::{Context, Result};
use clap::{Arg, Command};
use cronexpand_core::{AppConfig, OutputFormat};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod output;

use app::Application;

fn main() -> Result<()> {
    // 解析命令行参数
    let matches = Command::new("cronexpand")
        .version("0.1.0")
        .about("CRON表达式字段展开工具")
        .arg(
            Arg::new("expression")
                .value_name("EXPRESSION")
                .help("CRON表达式 (例如 \"*/15 0 1,15 * 1-3 /usr/bin/find\")")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("配置文件路径"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("日志级别")
                .value_parser(["trace", "debug", "info", "warn", "error"]),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("日志格式")
                .value_parser(["json", "pretty"]),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .help("输出格式")
                .value_parser(["text", "json"]),
        )
        .get_matches();

    // 获取命令行参数
    let expression = matches.get_one::<String>("expression").unwrap();
    let config_path = matches.get_one::<String>("config");

    // 加载配置, 命令行参数覆盖配置文件
    let mut config = AppConfig::load(config_path.map(|s| s.as_str()))
        .context("加载配置失败")?;

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log.level = level.clone();
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.log.format = format.clone();
    }
    if let Some(format) = matches.get_one::<String>("output") {
        config.output.format = match format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    // 初始化日志系统
    init_logging(&config.log.level, &config.log.format)?;

    debug!("输入表达式: {expression}");

    // 创建应用实例并展开表达式
    let app = Application::new(&config).context("初始化应用失败")?;
    let schedule = app.expand(expression)?;

    let rendered = output::render(&schedule, config.output.format)?;
    println!("{rendered}");

    info!("CRON表达式展开完成");
    Ok(())
}

/// 初始化日志系统
fn init_logging(log_level: &str, log_format: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("初始化JSON日志格式失败")?;
        }
        "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .context("初始化Pretty日志格式失败")?;
        }
        _ => {
            return Err(anyhow::anyhow!("不支持的日志格式: {log_format}"));
        }
    }

    Ok(())
}
