//! JSON report

use shared::DailyReport;
use std::io::Write;

pub fn write_report<W: Write>(report: &DailyReport, out: &mut W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use shared::{ClubTime, LogLine, TableId, TableSummary};

    #[test]
    fn test_document_shape() {
        let t = |h, m| ClubTime::new(h, m).unwrap();
        let report = DailyReport {
            opening: t(9, 0),
            closing: t(19, 0),
            cost_per_hour: 10,
            log: vec![
                LogLine::Opening { time: t(9, 0) },
                LogLine::AutoSeated {
                    time: t(12, 33),
                    client: "client4".to_string(),
                    table: TableId::new(1).unwrap(),
                },
                LogLine::Closing { time: t(19, 0) },
            ],
            tables: vec![TableSummary {
                table: TableId::new(1).unwrap(),
                revenue: 70,
                work_time: t(5, 58),
            }],
        };

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "opening": "09:00",
                "closing": "19:00",
                "cost_per_hour": 10,
                "log": [
                    { "kind": "opening", "time": "09:00" },
                    { "kind": "auto_seated", "time": "12:33", "client": "client4", "table": 1 },
                    { "kind": "closing", "time": "19:00" }
                ],
                "tables": [
                    { "table": 1, "revenue": 70, "work_time": "05:58" }
                ]
            })
        );
    }
}
