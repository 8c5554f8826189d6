//! Synthetic clinical decision records.
//!
//! Generates a seeded table of patient decision records, writes it to CSV,
//! summarises it per decision-support model and renders two comparison bar
//! charts.

pub mod algorithm;
pub mod charts;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{AppConfig, ChartConfig, GeneratorConfig};
pub use error::{Result, SynthError};
pub use models::{ArrowSchema, Gender, ModelType, Outcome, PatientRecord, PredictedAction};

pub use algorithm::{RecordGenerator, SummaryRow, SummaryTable, generate_records, predict_action, summarize};
pub use pipeline::{RunReport, run};
pub use utils::csv::{read_csv, write_csv};
