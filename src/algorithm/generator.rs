//! Seeded generator for synthetic patient records
//!
//! Columns are drawn one at a time, each for every row, from a single
//! `StdRng`. The draw order is part of the reproducibility contract: changing
//! it changes every column drawn afterwards.

use std::ops::Range;

use itertools::izip;
use log::{debug, info};
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::action::predict_action;
use crate::config::GeneratorConfig;
use crate::error::{Result, SynthError};
use crate::models::patient::{PatientRecord, format_patient_id};
use crate::models::types::{Gender, ModelType, Outcome, PredictedAction};
use crate::utils::round_to;

/// Age range, upper bound exclusive
pub const AGE_RANGE: Range<i64> = 20..90;
/// Symptom score bounds
pub const SYMPTOM_SCORE_RANGE: (f64, f64) = (0.0, 10.0);
/// Disease risk bounds
pub const DISEASE_RISK_RANGE: (f64, f64) = (0.0, 1.0);
/// Expected utility bounds
pub const EXPECTED_UTILITY_RANGE: (f64, f64) = (-1.0, 1.0);
/// Decision threshold bounds
pub const DECISION_THRESHOLD_RANGE: (f64, f64) = (0.3, 0.7);
/// Explanation score bounds
pub const EXPLANATION_SCORE_RANGE: (f64, f64) = (0.5, 1.0);
/// Model confidence bounds
pub const MODEL_CONFIDENCE_RANGE: (f64, f64) = (0.6, 1.0);

/// Gender categories and their sampling probabilities
pub const GENDER_WEIGHTS: [(Gender, f64); 3] = [
    (Gender::Male, 0.45),
    (Gender::Female, 0.45),
    (Gender::Other, 0.10),
];

/// Outcome categories and their sampling probabilities
pub const OUTCOME_WEIGHTS: [(Outcome, f64); 3] = [
    (Outcome::Improved, 0.5),
    (Outcome::NoChange, 0.3),
    (Outcome::Worsened, 0.2),
];

/// Model types and their sampling probabilities
pub const MODEL_TYPE_WEIGHTS: [(ModelType, f64); 3] = [
    (ModelType::DecisionTheory, 0.3),
    (ModelType::Xai, 0.3),
    (ModelType::Hybrid, 0.4),
];

/// Generator of synthetic patient tables
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    rng: StdRng,
    seed: u64,
}

impl RecordGenerator {
    /// Create a generator seeded with `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator from the seed in `config`
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.seed)
    }

    /// Draw `n` integers uniformly from `range`
    fn integer_column(&mut self, range: Range<i64>, n: usize) -> Vec<i64> {
        (0..n).map(|_| self.rng.random_range(range.clone())).collect()
    }

    /// Draw `n` floats uniformly from `[low, high)` and round each one
    fn uniform_column(&mut self, (low, high): (f64, f64), decimals: i32, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| round_to(self.rng.random_range(low..high), decimals))
            .collect()
    }

    /// Draw `n` categories according to `weights`
    fn choice_column<T: Copy>(&mut self, weights: &[(T, f64)], n: usize) -> Result<Vec<T>> {
        let dist = WeightedIndex::new(weights.iter().map(|(_, w)| *w))
            .map_err(|e| SynthError::Distribution(e.to_string()))?;
        Ok((0..n).map(|_| weights[dist.sample(&mut self.rng)].0).collect())
    }

    /// Generate a table of `n` records
    pub fn generate(&mut self, n: usize) -> Result<Vec<PatientRecord>> {
        info!("Generating {n} synthetic records (seed {})", self.seed);

        let ids: Vec<String> = (1..=n).map(format_patient_id).collect();
        let ages = self.integer_column(AGE_RANGE, n);
        let genders = self.choice_column(&GENDER_WEIGHTS, n)?;
        let symptom_scores = self.uniform_column(SYMPTOM_SCORE_RANGE, 2, n);
        let disease_risks = self.uniform_column(DISEASE_RISK_RANGE, 3, n);
        let expected_utilities = self.uniform_column(EXPECTED_UTILITY_RANGE, 3, n);
        let thresholds = self.uniform_column(DECISION_THRESHOLD_RANGE, 2, n);

        let actions: Vec<PredictedAction> = disease_risks
            .iter()
            .zip(&thresholds)
            .map(|(&risk, &threshold)| predict_action(risk, threshold))
            .collect();

        let explanation_scores = self.uniform_column(EXPLANATION_SCORE_RANGE, 3, n);
        let confidences = self.uniform_column(MODEL_CONFIDENCE_RANGE, 3, n);
        let outcomes = self.choice_column(&OUTCOME_WEIGHTS, n)?;
        let model_types = self.choice_column(&MODEL_TYPE_WEIGHTS, n)?;

        let records: Vec<PatientRecord> = izip!(
            ids,
            ages,
            genders,
            symptom_scores,
            disease_risks,
            expected_utilities,
            thresholds,
            actions,
            explanation_scores,
            confidences,
            outcomes,
            model_types
        )
        .map(
            |(
                patient_id,
                age,
                gender,
                symptom_score,
                disease_risk,
                expected_utility,
                decision_threshold,
                predicted_action,
                explanation_score,
                model_confidence,
                outcome,
                model_type,
            )| PatientRecord {
                patient_id,
                age,
                gender,
                symptom_score,
                disease_risk,
                expected_utility,
                decision_threshold,
                predicted_action,
                explanation_score,
                model_confidence,
                outcome,
                model_type,
            },
        )
        .collect();

        debug!(
            "Generated {} records, {} marked Treat",
            records.len(),
            records
                .iter()
                .filter(|r| r.predicted_action == PredictedAction::Treat)
                .count()
        );
        Ok(records)
    }
}

/// Generate the table described by `config`
pub fn generate_records(config: &GeneratorConfig) -> Result<Vec<PatientRecord>> {
    RecordGenerator::from_config(config).generate(config.record_count)
}
