//! The single linear run: generate, persist, summarise, chart.

use std::io::Write;
use std::path::PathBuf;

use log::info;

use crate::algorithm::generator::generate_records;
use crate::algorithm::summary::{SummaryTable, summarize};
use crate::charts::render_comparison_charts;
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::patient::PatientRecord;
use crate::utils::csv::write_csv;

/// What a run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The generated table
    pub records: Vec<PatientRecord>,
    /// Per-model summary of `records`
    pub summary: SummaryTable,
    /// Path of the CSV file
    pub csv_path: PathBuf,
    /// Paths of the rendered charts
    pub chart_paths: Vec<PathBuf>,
}

/// Run the whole pipeline, writing the console report to `out`.
///
/// Any failure aborts the run; files already written are left in place.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<RunReport> {
    let records = generate_records(&config.generator)?;

    write_csv(&config.output_path, &records)?;
    writeln!(out, "✅ Dataset saved as '{}'", config.output_file_name())?;

    let summary = summarize(&records);
    writeln!(out, "\n📊 Model Performance Summary\n")?;
    write!(out, "{summary}")?;
    out.flush()?;

    let chart_paths = render_comparison_charts(&config.chart)?;
    info!("Run complete: {} records, {} charts", records.len(), chart_paths.len());

    Ok(RunReport {
        records,
        summary,
        csv_path: config.output_path.clone(),
        chart_paths,
    })
}
