//! Synthetic patient record model
//!
//! One `PatientRecord` is one row of the generated decision table. The Arrow
//! schema fixes the column order used for the CSV header.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::algorithm::action::predict_action;
use crate::algorithm::generator::{
    AGE_RANGE, DECISION_THRESHOLD_RANGE, DISEASE_RISK_RANGE, EXPECTED_UTILITY_RANGE,
    EXPLANATION_SCORE_RANGE, MODEL_CONFIDENCE_RANGE, SYMPTOM_SCORE_RANGE,
};
use crate::error::{Result, SynthError};
use crate::models::traits::ArrowSchema;
use crate::models::types::{Gender, ModelType, Outcome, PredictedAction};

/// One synthetic clinical decision record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// `P` followed by the 1-based sequence number, zero padded to 3 digits
    pub patient_id: String,
    /// Age in whole years
    pub age: i64,
    pub gender: Gender,
    /// Symptom severity on a 0-10 scale
    pub symptom_score: f64,
    /// Estimated probability of disease
    pub disease_risk: f64,
    pub expected_utility: f64,
    /// Risk level above which treatment is considered
    pub decision_threshold: f64,
    /// Derived from `disease_risk` and `decision_threshold`
    pub predicted_action: PredictedAction,
    pub explanation_score: f64,
    pub model_confidence: f64,
    pub outcome: Outcome,
    pub model_type: ModelType,
}

/// Format the patient id for a 1-based sequence number
#[must_use]
pub fn format_patient_id(sequence: usize) -> String {
    format!("P{sequence:03}")
}

fn check_range(name: &str, value: f64, (low, high): (f64, f64)) -> Result<()> {
    if value.is_finite() && (low..=high).contains(&value) {
        Ok(())
    } else {
        Err(SynthError::validation(format!(
            "{name} {value} outside [{low}, {high}]"
        )))
    }
}

impl PatientRecord {
    /// Check every column against its documented range and re-derive the action.
    ///
    /// Float bounds are closed because rounding can land on the upper limit.
    pub fn validate(&self) -> Result<()> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(SynthError::validation(format!(
                "{}: age {} outside [{}, {})",
                self.patient_id, self.age, AGE_RANGE.start, AGE_RANGE.end
            )));
        }

        let checks = [
            ("symptom_score", self.symptom_score, SYMPTOM_SCORE_RANGE),
            ("disease_risk", self.disease_risk, DISEASE_RISK_RANGE),
            ("expected_utility", self.expected_utility, EXPECTED_UTILITY_RANGE),
            ("decision_threshold", self.decision_threshold, DECISION_THRESHOLD_RANGE),
            ("explanation_score", self.explanation_score, EXPLANATION_SCORE_RANGE),
            ("model_confidence", self.model_confidence, MODEL_CONFIDENCE_RANGE),
        ];
        for (name, value, range) in checks {
            check_range(name, value, range)
                .map_err(|e| SynthError::validation(format!("{}: {e}", self.patient_id)))?;
        }

        let expected = predict_action(self.disease_risk, self.decision_threshold);
        if self.predicted_action != expected {
            return Err(SynthError::validation(format!(
                "{}: predicted_action {} but rule gives {expected}",
                self.patient_id, self.predicted_action
            )));
        }

        Ok(())
    }
}

/// Validate a whole table: every row plus the `P001..PNNN` id sequence
pub fn validate_table(records: &[PatientRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let expected_id = format_patient_id(index + 1);
        if record.patient_id != expected_id {
            return Err(SynthError::validation(format!(
                "row {index}: patient_id {} but expected {expected_id}",
                record.patient_id
            )));
        }
        record.validate()?;
    }
    Ok(())
}

impl ArrowSchema for PatientRecord {
    /// Columns in file order
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("patient_id", DataType::Utf8, false),
            Field::new("age", DataType::Int64, false),
            Field::new("gender", DataType::Utf8, false),
            Field::new("symptom_score", DataType::Float64, false),
            Field::new("disease_risk", DataType::Float64, false),
            Field::new("expected_utility", DataType::Float64, false),
            Field::new("decision_threshold", DataType::Float64, false),
            Field::new("predicted_action", DataType::Utf8, false),
            Field::new("explanation_score", DataType::Float64, false),
            Field::new("model_confidence", DataType::Float64, false),
            Field::new("outcome", DataType::Utf8, false),
            Field::new("model_type", DataType::Utf8, false),
        ])
    }

    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    fn to_record_batch(records: &[Self]) -> Result<RecordBatch> {
        let schema = Self::schema();
        let fields: Vec<FieldRef> = schema.fields().iter().map(Arc::clone).collect();

        Ok(serde_arrow::to_record_batch(&fields, &records)?)
    }
}
