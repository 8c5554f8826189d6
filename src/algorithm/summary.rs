//! Per-model summary statistics
//!
//! Groups the patient table by `model_type` and reports mean explanation
//! score, mean model confidence and the share of improved outcomes.

use std::collections::BTreeMap;
use std::fmt;

use log::info;

use crate::models::patient::PatientRecord;
use crate::models::types::{ModelType, Outcome};
use crate::utils::{mean, round_to};

/// Column headers of the printed summary
pub const SUMMARY_HEADERS: [&str; 4] = [
    "model_type",
    "Avg_Explanation_Score",
    "Avg_Model_Confidence",
    "Improved_Rate",
];

/// Summary statistics for one model type
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Group key
    pub model_type: ModelType,
    /// Mean explanation score, 2 decimals
    pub avg_explanation_score: f64,
    /// Mean model confidence, 2 decimals
    pub avg_model_confidence: f64,
    /// Percentage (0-100) of rows with an improved outcome, 2 decimals
    pub improved_rate: f64,
}

/// Grouped summary, one row per model type present in the data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    /// Rows in model type order
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Look up the row for a model type
    #[must_use]
    pub fn get(&self, model_type: ModelType) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.model_type == model_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cells(&self) -> Vec<[String; 4]> {
        self.rows
            .iter()
            .map(|row| {
                [
                    row.model_type.to_string(),
                    format!("{:.2}", row.avg_explanation_score),
                    format!("{:.2}", row.avg_model_confidence),
                    format!("{:.2}", row.improved_rate),
                ]
            })
            .collect()
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, line: &[&str], widths: &[usize; 4]) -> fmt::Result {
    let padded: Vec<String> = line
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect();
    writeln!(f, "{}", padded.join("  "))
}

/// Right-aligned plain text table, columns separated by two spaces
impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let mut widths = SUMMARY_HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(f, &SUMMARY_HEADERS, &widths)?;
        for row in &cells {
            let line: Vec<&str> = row.iter().map(String::as_str).collect();
            write_line(f, &line, &widths)?;
        }
        Ok(())
    }
}

/// Group `records` by model type and compute the summary statistics.
///
/// Model types with no rows are left out rather than reported as zero.
#[must_use]
pub fn summarize(records: &[PatientRecord]) -> SummaryTable {
    let mut groups: BTreeMap<ModelType, Vec<&PatientRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.model_type).or_default().push(record);
    }

    let rows: Vec<SummaryRow> = groups
        .into_iter()
        .filter_map(|(model_type, group)| {
            let avg_explanation_score = mean(group.iter().map(|r| r.explanation_score))?;
            let avg_model_confidence = mean(group.iter().map(|r| r.model_confidence))?;
            let improved_share = mean(group.iter().map(|r| {
                if r.outcome == Outcome::Improved { 1.0 } else { 0.0 }
            }))?;

            Some(SummaryRow {
                model_type,
                avg_explanation_score: round_to(avg_explanation_score, 2),
                avg_model_confidence: round_to(avg_model_confidence, 2),
                improved_rate: round_to(improved_share * 100.0, 2),
            })
        })
        .collect();

    info!(
        "Summarized {} records into {} model groups",
        records.len(),
        rows.len()
    );
    SummaryTable { rows }
}
