//! Literal comparison tables shown in the charts
//!
//! These figures are fixed reference values; they are not computed from the
//! generated records.

/// One row of the success rate comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuccessRateRow {
    pub model_type: &'static str,
    pub total_cases: u32,
    pub improved_outcomes: u32,
    /// Percentage of improved outcomes
    pub success_rate: f64,
}

/// One row of the confidence vs explanation comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceRow {
    pub model_type: &'static str,
    pub model_confidence: f64,
    pub explanation_score: f64,
}

/// Success rates per model
pub const SUCCESS_RATE_TABLE: [SuccessRateRow; 3] = [
    SuccessRateRow {
        model_type: "Hybrid Model",
        total_cases: 44,
        improved_outcomes: 30,
        success_rate: 68.182,
    },
    SuccessRateRow {
        model_type: "Decision Theory Model",
        total_cases: 25,
        improved_outcomes: 9,
        success_rate: 36.00,
    },
    SuccessRateRow {
        model_type: "Explainable AI",
        total_cases: 31,
        improved_outcomes: 10,
        success_rate: 32.258,
    },
];

/// Mean confidence and explanation score per model
pub const CONFIDENCE_TABLE: [ConfidenceRow; 3] = [
    ConfidenceRow {
        model_type: "Hybrid Model",
        model_confidence: 0.813,
        explanation_score: 0.745,
    },
    ConfidenceRow {
        model_type: "Decision Theory Model",
        model_confidence: 0.832,
        explanation_score: 0.730,
    },
    ConfidenceRow {
        model_type: "Explainable AI (XAI)",
        model_confidence: 0.795,
        explanation_score: 0.776,
    },
];
