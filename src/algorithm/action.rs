//! Threshold rule for the predicted action

use crate::models::types::PredictedAction;

/// Margin around the decision threshold
pub const ACTION_MARGIN: f64 = 0.1;

/// Derive the action from disease risk `r` and decision threshold `t`.
///
/// `Treat` when `r > t + 0.1`, otherwise `Monitor` when `|r - t| < 0.1`,
/// otherwise `Discharge`. Both comparisons are strict, so a difference of
/// exactly 0.1 in either direction falls through to `Discharge`.
#[must_use]
pub fn predict_action(disease_risk: f64, decision_threshold: f64) -> PredictedAction {
    if disease_risk > decision_threshold + ACTION_MARGIN {
        PredictedAction::Treat
    } else if (disease_risk - decision_threshold).abs() < ACTION_MARGIN {
        PredictedAction::Monitor
    } else {
        PredictedAction::Discharge
    }
}
