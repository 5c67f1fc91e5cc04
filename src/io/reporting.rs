// src/io/reporting.rs

use crate::error::Result;
use crate::simulation::engine::{HistoryRecord, PolicyResult};
use serde::Serialize;
use std::io;
use std::path::Path;

const RULE_WIDTH: usize = 80;

/// Renders ranked results as a fixed-width comparison table.
///
/// Rows are printed in the order given; pass them already sorted.
pub fn render_table(results: &[PolicyResult]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let header = format!(
        "{:<16} {:>15} {:>15} {:>15} {:>15}",
        "Policy", "Ordering Cost", "Holding Cost", "Shortage Cost", "Total Cost"
    );

    let mut lines = vec![
        "Policy Comparison Results:".to_string(),
        rule.clone(),
        header,
        rule,
    ];
    lines.extend(results.iter().map(|result| {
        format!(
            "{:<16} {:>15.2} {:>15.2} {:>15.2} {:>15.2}",
            result.policy().to_string(),
            result.avg_ordering_cost,
            result.avg_holding_cost,
            result.avg_shortage_cost,
            result.avg_total_cost
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes ranked results as CSV.
pub fn write_results<W: io::Write>(writer: W, results: &[PolicyResult]) -> Result<()> {
    write_records(writer, results)
}

/// Writes per-month history rows as CSV.
pub fn write_history<W: io::Write>(writer: W, history: &[HistoryRecord]) -> Result<()> {
    write_records(writer, history)
}

pub fn write_results_file(file_path: &Path, results: &[PolicyResult]) -> Result<()> {
    let file = std::fs::File::create(file_path)?;
    write_results(file, results)
}

pub fn write_history_file(file_path: &Path, history: &[HistoryRecord]) -> Result<()> {
    let file = std::fs::File::create(file_path)?;
    write_history(file, history)
}

fn write_records<W: io::Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
