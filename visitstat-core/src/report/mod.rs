//! Percentage breakdowns of frequency tables.
//!
//! Percentages are taken against the number of lines in the session, not against the table's
//! own sum: a record that lands in no bucket still counts toward the denominator.

#[cfg(test)]
mod tests;

use crate::counter::FrequencyTable;
use serde::Serialize;
use std::fmt::Write;

const PERCENTAGE_MULTIPLIER: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub category: String,
    pub total: usize,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub count: u64,
    pub percentage: f64,
}

impl CategoryReport {
    pub fn new(category: &str, table: &FrequencyTable, total: usize) -> Self {
        let entries = table
            .sorted_desc()
            .into_iter()
            .map(|(label, count)| ReportEntry {
                label: label.to_string(),
                count,
                percentage: percentage(count, total),
            })
            .collect();

        Self {
            category: category.to_string(),
            total,
            entries,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("{}:\n", self.category);
        for entry in &self.entries {
            let _ = writeln!(out, "{} - {:.2}%", entry.label, round_half_up(entry.percentage));
        }
        out.push('\n');
        out
    }
}

pub fn percentage(count: u64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * PERCENTAGE_MULTIPLIER) / total as f64
}

/// Round to two decimals, exact halves away from zero. `{:.2}` alone rounds them to even.
pub fn round_half_up(value: f64) -> f64 {
    (value * PERCENTAGE_MULTIPLIER).round() / PERCENTAGE_MULTIPLIER
}

/// Header, one `label - pct%` line per entry (highest count first), then a blank line.
pub fn render(table: &FrequencyTable, category: &str, total: usize) -> String {
    CategoryReport::new(category, table, total).render_text()
}

pub fn render_json(reports: &[CategoryReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
