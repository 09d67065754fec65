//! Club Engine - 电脑俱乐部日营业回放
//!
//! Reads one business day of client events, replays them against the club
//! rules and reports the annotated event log plus per-table revenue.
//!
//! # 模块结构
//!
//! ```text
//! club-engine/src/
//! ├── core/      # 配置
//! ├── input/     # 输入解析与校验
//! ├── club/      # 状态机: 桌子、客户、排队、计费
//! ├── report/    # text / json 输出
//! └── utils/     # 错误、日志、工具函数
//! ```
//!
//! # Example
//!
//! ```
//! let report = club_engine::replay("1\n09:00 19:00\n10\n09:10 1 alice\n09:12 2 alice 1\n").unwrap();
//! assert_eq!(report.tables[0].to_string(), "1 100 09:48");
//! ```

pub mod club;
pub mod core;
pub mod input;
pub mod report;
pub mod utils;

pub use club::{ClubSession, ClubSettings};
pub use crate::core::Config;
pub use input::{ClubInput, InputError, InputErrorKind, InputResult};
pub use report::{OutputFormat, render};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger_with_file;

use shared::DailyReport;
use std::fs;
use std::io::Write;
use tracing::info;

/// Parse `input` and replay the whole day
///
/// Malformed input stops before any event is processed.
pub fn replay(input: impl AsRef<[u8]>) -> InputResult<DailyReport> {
    let ClubInput { settings, events } = input::parse(input)?;
    let mut session = ClubSession::open(settings);
    for event in &events {
        session.process(event);
    }
    Ok(session.close())
}

/// Read the configured input, replay it and write the report to `out`
///
/// Nothing is written unless the whole input is valid.
pub fn run<W: Write>(config: &Config, out: &mut W) -> AppResult<()> {
    let bytes = fs::read(&config.input).map_err(|source| AppError::Read {
        path: config.input.clone(),
        source,
    })?;
    info!(input = %config.input.display(), format = %config.format, "Replaying day");

    let report = replay(&bytes)?;
    render(&report, config.format, out)?;

    info!(
        log_lines = report.log.len(),
        revenue = report.total_revenue(),
        "Report written"
    );
    Ok(())
}

/// 设置运行环境 (日志)
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}
