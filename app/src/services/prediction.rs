//! Prediction invocation and result mapping

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use shared::{FeatureRow, RainClassifier, RainForecast, RainVerdict, RAIN_LABEL};

/// Runs the loaded classifier on built feature rows
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<RainClassifier>,
}

impl PredictionService {
    /// Create a new PredictionService instance
    pub fn new(model: Arc<RainClassifier>) -> Self {
        Self { model }
    }

    /// Classify one feature row into a forecast
    ///
    /// The width check runs before inference so a malformed row surfaces as
    /// a schema error rather than an opaque inference failure. Inference is
    /// synchronous and always terminates; there is no retry.
    pub fn predict(&self, row: &FeatureRow) -> AppResult<RainForecast> {
        if row.width() != self.model.n_features {
            return Err(AppError::SchemaMismatch {
                expected: self.model.n_features,
                actual: row.width(),
            });
        }

        let (label, probability) = self.model.predict(row).map_err(AppError::Inference)?;
        let verdict = if label == RAIN_LABEL {
            RainVerdict::Rain
        } else {
            RainVerdict::Clear
        };

        tracing::debug!(?verdict, probability, "Prediction complete");
        Ok(RainForecast::new(verdict, probability))
    }
}
