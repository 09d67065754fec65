//! Daily Report Model (日结报告)

use super::{ClubTime, LogLine};
use crate::types::TableId;
use serde::Serialize;
use std::fmt;

/// Per-table end-of-day line: `<table> <revenue> <HH:MM>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub table: TableId,
    /// payment units * cost per hour
    pub revenue: u64,
    /// Total occupied time
    pub work_time: ClubTime,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.table, self.revenue, self.work_time)
    }
}

/// Daily Report - full result of one replayed day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub opening: ClubTime,
    pub closing: ClubTime,
    pub cost_per_hour: u32,
    /// Annotated log, from the opening marker to the closing marker
    pub log: Vec<LogLine>,
    /// Ascending by table id
    pub tables: Vec<TableSummary>,
}

impl DailyReport {
    /// Sum over all tables (wider than a single table's revenue)
    pub fn total_revenue(&self) -> u128 {
        self.tables.iter().map(|t| u128::from(t.revenue)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_summary_line() {
        let summary = TableSummary {
            table: TableId::new(2).unwrap(),
            revenue: 180,
            work_time: ClubTime::new(4, 16).unwrap(),
        };
        assert_eq!(summary.to_string(), "2 180 04:16");
    }

    #[test]
    fn test_total_revenue() {
        let report = DailyReport {
            opening: ClubTime::new(9, 0).unwrap(),
            closing: ClubTime::new(19, 0).unwrap(),
            cost_per_hour: 10,
            log: vec![],
            tables: vec![
                TableSummary {
                    table: TableId::new(1).unwrap(),
                    revenue: 70,
                    work_time: ClubTime::new(5, 58).unwrap(),
                },
                TableSummary {
                    table: TableId::new(2).unwrap(),
                    revenue: 30,
                    work_time: ClubTime::new(2, 18).unwrap(),
                },
            ],
        };
        assert_eq!(report.total_revenue(), 100);
    }
}
