//! Record generation and analysis
//!
//! - `generator`: seeded synthetic record generation
//! - `action`: the threshold rule behind `predicted_action`
//! - `summary`: per-model aggregate statistics

pub mod action;
pub mod generator;
pub mod summary;

pub use action::predict_action;
pub use generator::{RecordGenerator, generate_records};
pub use summary::{SummaryRow, SummaryTable, summarize};
