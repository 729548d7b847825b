//! Serialized binary rain classifier

use serde::{Deserialize, Serialize};

use crate::models::FeatureRow;

/// Positive-class label (rain tomorrow)
pub const RAIN_LABEL: u8 = 1;

/// Decision threshold for the hard label
const DECISION_THRESHOLD: f64 = 0.5;

/// Logistic-regression classifier restored from its training export
///
/// Inference is a dot product over the feature row plus the intercept,
/// squashed through the logistic function. The width fields are validated
/// against the asset bundle's schema at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainClassifier {
    /// Input width the model was fitted on
    pub n_features: usize,
    /// One coefficient per schema column, in schema order
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl RainClassifier {
    /// Probability assigned to the positive (rain) class
    pub fn predict_proba(&self, row: &FeatureRow) -> Result<f64, &'static str> {
        if row.width() != self.n_features || self.coefficients.len() != self.n_features {
            return Err("feature row width does not match the fitted model");
        }
        let z: f64 = self
            .coefficients
            .iter()
            .zip(row.values())
            .map(|(c, v)| c * v)
            .sum::<f64>()
            + self.intercept;
        Ok(sigmoid(z))
    }

    /// Hard class label plus the positive-class probability
    pub fn predict(&self, row: &FeatureRow) -> Result<(u8, f64), &'static str> {
        let proba = self.predict_proba(row)?;
        let label = if proba >= DECISION_THRESHOLD { 1 } else { 0 };
        Ok((label, proba))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_feature_model(coefficient: f64, intercept: f64) -> RainClassifier {
        RainClassifier {
            n_features: 1,
            coefficients: vec![coefficient],
            intercept,
        }
    }

    fn row_with(value: f64) -> FeatureRow {
        let mut row = FeatureRow::zeroed(&["x".to_string()]);
        row.set("x", value);
        row
    }

    #[test]
    fn test_sigmoid_midpoint_and_symmetry() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_logit_scores_half() {
        let model = single_feature_model(1.0, 0.0);
        assert_eq!(model.predict_proba(&row_with(0.0)).unwrap(), 0.5);
    }

    #[test]
    fn test_positive_logit_predicts_rain() {
        let model = single_feature_model(2.0, 0.0);
        let (label, proba) = model.predict(&row_with(1.5)).unwrap();
        assert_eq!(label, RAIN_LABEL);
        assert!(proba > 0.9);
    }

    #[test]
    fn test_negative_logit_predicts_clear() {
        let model = single_feature_model(2.0, -1.0);
        let (label, proba) = model.predict(&row_with(-1.0)).unwrap();
        assert_eq!(label, 0);
        assert!(proba < 0.1);
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let model = single_feature_model(1.0, 0.0);
        let row = FeatureRow::zeroed(&["a".to_string(), "b".to_string()]);
        assert!(model.predict_proba(&row).is_err());
        assert!(model.predict(&row).is_err());
    }

    #[test]
    fn test_model_round_trips_through_json() {
        let model = single_feature_model(0.75, -0.25);
        let json = serde_json::to_string(&model).unwrap();
        let back: RainClassifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back.n_features, 1);
        assert_eq!(back.coefficients, vec![0.75]);
        assert_eq!(back.intercept, -0.25);
    }
}
