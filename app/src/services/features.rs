//! Feature vector construction service

use std::sync::Arc;

use shared::{build_feature_row, AssetBundle, BuildReport, FeatureRow, UserObservation};

/// Builds fixed-schema feature rows from user observations
///
/// Holds the read-only asset bundle; each `build` call is a pure function of
/// the observation and that bundle.
#[derive(Clone)]
pub struct FeatureVectorBuilder {
    assets: Arc<AssetBundle>,
}

impl FeatureVectorBuilder {
    /// Create a new FeatureVectorBuilder instance
    pub fn new(assets: Arc<AssetBundle>) -> Self {
        Self { assets }
    }

    /// Build the feature row for one observation
    ///
    /// Substitutions applied during the build are logged and reported back;
    /// they never fail the request.
    pub fn build(&self, observation: &UserObservation) -> (FeatureRow, BuildReport) {
        let (row, report) = build_feature_row(observation, &self.assets);

        for label in &report.defaulted_labels {
            tracing::warn!("Unrecognized label fell back to a default code: {label}");
        }
        if let Some(location) = &report.unknown_location {
            tracing::warn!(
                "Location '{location}' has no one-hot column; the row encodes no known location"
            );
        }
        if !report.clamped_fields.is_empty() {
            tracing::debug!(fields = ?report.clamped_fields, "Clamped to training bounds");
        }

        (row, report)
    }
}
