//! Report rendering
//!
//! - [`OutputFormat::Text`]: the annotated log followed by one summary line per table
//! - [`OutputFormat::Json`]: the whole [`DailyReport`] as one JSON document

pub mod json;
pub mod text;

use crate::utils::AppResult;
use clap::ValueEnum;
use shared::DailyReport;
use std::fmt;
use std::io::Write;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Write `report` to `out` in the requested format
pub fn render<W: Write>(report: &DailyReport, format: OutputFormat, out: &mut W) -> AppResult<()> {
    match format {
        OutputFormat::Text => text::write_report(report, out)?,
        OutputFormat::Json => json::write_report(report, out)?,
    }
    out.flush()?;
    Ok(())
}
