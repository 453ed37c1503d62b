//! End-of-run summary: totals table and lowest-cost algorithms.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::record::BenchmarkRecord;

const HEADERS: [&str; 4] = ["Method", "Total Time", "Total Memory", "Peak Memory"];

/// One table row, in display units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryRow {
    /// Algorithm name.
    pub method: String,
    /// Total time in seconds.
    pub total_seconds: f64,
    /// Total memory in megabytes.
    pub total_memory_mb: f64,
    /// Peak memory in megabytes.
    pub peak_memory_mb: f64,
}

impl From<&BenchmarkRecord> for SummaryRow {
    fn from(record: &BenchmarkRecord) -> Self {
        Self {
            method: record.name.clone(),
            total_seconds: record.total_seconds(),
            total_memory_mb: record.total_memory_mb(),
            peak_memory_mb: record.peak_memory_mb(),
        }
    }
}

/// Per-algorithm totals plus the cheapest algorithm by time and by memory.
///
/// `fastest` and `leanest` scan rows in order and keep a candidate whenever
/// its value is less than or equal to the best so far, so among exact ties
/// the last row wins. Both are `None` when there are no rows.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Rows in first-use order.
    pub rows: Vec<SummaryRow>,
    /// Name and total seconds of the algorithm with the lowest total time.
    pub fastest: Option<(String, f64)>,
    /// Name and total megabytes of the algorithm with the lowest total memory.
    pub leanest: Option<(String, f64)>,
}

impl Summary {
    /// Build the summary for `records`, keeping their order.
    #[must_use]
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        let rows: Vec<SummaryRow> = records.iter().map(SummaryRow::from).collect();
        let fastest = lowest(&rows, |r| r.total_seconds);
        let leanest = lowest(&rows, |r| r.total_memory_mb);
        Self {
            rows,
            fastest,
            leanest,
        }
    }
}

fn lowest(rows: &[SummaryRow], key: impl Fn(&SummaryRow) -> f64) -> Option<(String, f64)> {
    let mut best: Option<&SummaryRow> = None;
    for row in rows {
        match best {
            Some(current) if key(row) > key(current) => {}
            _ => best = Some(row),
        }
    }
    best.map(|row| (row.method.clone(), key(row)))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 4]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.method.clone(),
                    format!("{:.6}s", r.total_seconds),
                    format!("{:.6}MB", r.total_memory_mb),
                    format!("{:.6}MB", r.peak_memory_mb),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let rule = |f: &mut fmt::Formatter<'_>, fill: &str| -> fmt::Result {
            for w in widths {
                write!(f, "+{}", fill.repeat(w + 2))?;
            }
            writeln!(f, "+")
        };
        let line = |f: &mut fmt::Formatter<'_>, row: &[&str]| -> fmt::Result {
            for (cell, w) in row.iter().zip(widths) {
                write!(f, "| {cell:<w$} ")?;
            }
            writeln!(f, "|")
        };

        writeln!(f, "Summary of Rotation Methods:")?;
        rule(f, "-")?;
        line(f, &HEADERS)?;
        rule(f, "=")?;
        for row in &cells {
            line(f, &row.each_ref().map(String::as_str))?;
            rule(f, "-")?;
        }

        if let Some((name, seconds)) = &self.fastest {
            writeln!(f)?;
            writeln!(f, "{name} has the lowest total time of {seconds:.6}s")?;
        }
        if let Some((name, mb)) = &self.leanest {
            writeln!(f, "{name} has the lowest total memory of {mb:.6}MB")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Measurement;
    use std::time::Duration;

    fn record(name: &str, micros: u64, bytes: u64) -> BenchmarkRecord {
        let mut r = BenchmarkRecord::new(name);
        r.absorb(&Measurement::new(Duration::from_micros(micros), bytes, bytes));
        r
    }

    #[test]
    fn picks_lowest_time_and_memory() {
        let records = [
            record("euler", 30, 500),
            record("matrix", 10, 900),
            record("quaternion", 20, 100),
        ];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.fastest.as_ref().map(|(n, _)| n.as_str()), Some("matrix"));
        assert_eq!(summary.leanest.as_ref().map(|(n, _)| n.as_str()), Some("quaternion"));
    }

    #[test]
    fn ties_go_to_last_seen() {
        let records = [
            record("euler", 10, 0),
            record("matrix", 10, 0),
            record("rodrigues", 99, 0),
        ];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.fastest.as_ref().map(|(n, _)| n.as_str()), Some("matrix"));
        assert_eq!(summary.leanest.as_ref().map(|(n, _)| n.as_str()), Some("rodrigues"));
    }

    #[test]
    fn empty_has_no_winners() {
        let summary = Summary::from_records(&[]);
        assert!(summary.fastest.is_none());
        assert!(summary.leanest.is_none());
        assert!(!summary.to_string().contains("lowest"));
    }

    #[test]
    fn rows_keep_record_order() {
        let records = [record("rodrigues", 1, 1), record("euler", 1, 1)];
        let summary = Summary::from_records(&records);
        let names: Vec<_> = summary.rows.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(names, ["rodrigues", "euler"]);
    }

    #[test]
    fn renders_grid_table() {
        let records = [record("matrix", 12, 192)];
        let rendered = Summary::from_records(&records).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "Summary of Rotation Methods:");
        assert_eq!(lines[1], "+--------+------------+--------------+-------------+");
        assert_eq!(lines[2], "| Method | Total Time | Total Memory | Peak Memory |");
        assert_eq!(lines[3], "+========+============+==============+=============+");
        assert_eq!(lines[4], "| matrix | 0.000012s  | 0.000192MB   | 0.000192MB  |");
        assert_eq!(lines[5], lines[1]);
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "matrix has the lowest total time of 0.000012s");
        assert_eq!(lines[8], "matrix has the lowest total memory of 0.000192MB");
    }
}
