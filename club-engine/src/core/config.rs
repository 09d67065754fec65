use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// 运行配置 - 命令行参数, 可由环境变量覆盖
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | CLUB_OUTPUT_FORMAT | text | 输出格式: text / json |
/// | CLUB_LOG_LEVEL | warn | 日志级别 |
/// | CLUB_LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
///
/// # 示例
///
/// ```ignore
/// CLUB_LOG_LEVEL=debug club-engine day.txt --format json
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "club-engine", version, about = "Replay one business day of a computer club")]
pub struct Config {
    /// Input file: header lines followed by one event per line
    pub input: PathBuf,

    /// Report format
    #[arg(long, env = "CLUB_OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// tracing level or filter directive
    #[arg(long, env = "CLUB_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long, env = "CLUB_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl Config {
    /// 从 .env、环境变量和命令行加载配置
    pub fn from_args() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }

    /// 默认配置, 仅指定输入文件
    ///
    /// 常用于测试场景
    pub fn with_overrides(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}
