//! Plain text report

use shared::DailyReport;
use std::io::{self, Write};

/// 打印日志行, 然后每张桌子一行汇总
pub fn write_report<W: Write>(report: &DailyReport, out: &mut W) -> io::Result<()> {
    for line in &report.log {
        writeln!(out, "{line}")?;
    }
    for summary in &report.tables {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ClubErrorKind, ClubTime, LogLine, TableId, TableSummary};

    fn t(hour: u32, minute: u32) -> ClubTime {
        ClubTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_log_then_tables() {
        let report = DailyReport {
            opening: t(9, 0),
            closing: t(19, 0),
            cost_per_hour: 10,
            log: vec![
                LogLine::Opening { time: t(9, 0) },
                LogLine::Rejected {
                    time: t(9, 10),
                    error: ClubErrorKind::ClientUnknown,
                },
                LogLine::Closing { time: t(19, 0) },
            ],
            tables: vec![TableSummary {
                table: TableId::new(1).unwrap(),
                revenue: 0,
                work_time: ClubTime::ZERO,
            }],
        };

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "09:00\n09:10 13 ClientUnknown\n19:00\n1 0 00:00\n"
        );
    }
}
