//! Domain models for the synthetic clinical decision table
//!
//! A run produces one table of `PatientRecord` rows. The categorical columns
//! are closed enums defined in `types`.

pub mod patient;
pub mod traits;
pub mod types;

pub use patient::{PatientRecord, validate_table};
pub use traits::ArrowSchema;
pub use types::{Gender, ModelType, Outcome, PredictedAction};
