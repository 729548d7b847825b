//! Feature vector construction from a user observation
//!
//! The transformation is a deterministic, pure function of the observation
//! and the asset bundle: the same inputs always produce a bit-identical row.

use std::collections::HashSet;

use chrono::Datelike;

use crate::models::{AssetBundle, FeatureRow, UserObservation};

/// Schema column holding the encoded rain-today flag
pub const RAIN_TODAY_COLUMN: &str = "RainToday";

/// Schema column holding the encoded wind gust direction
pub const WIND_GUST_DIR_COLUMN: &str = "WindGustDir_Encoded";

/// Diagnostic record produced alongside a feature row
///
/// Captures every substitution the build applied, so the caller can surface
/// them instead of losing the signal to a silent default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    /// Numeric fields clamped to their training bounds
    pub clamped_fields: Vec<String>,
    /// Categorical labels that fell back to a default code
    pub defaulted_labels: Vec<String>,
    /// Columns backfilled from recorded imputation values
    pub imputed_columns: Vec<String>,
    /// Location missing from the one-hot schema, if any
    pub unknown_location: Option<String>,
}

impl BuildReport {
    /// Whether the build applied no clamping and no fallback substitutions
    ///
    /// Imputation backfill is expected on every build and does not count.
    pub fn is_clean(&self) -> bool {
        self.clamped_fields.is_empty()
            && self.defaulted_labels.is_empty()
            && self.unknown_location.is_none()
    }
}

/// Build the fixed-schema feature row for one observation
///
/// Column set and order of the result always equal the bundle's
/// `feature_columns`, and every column holds a number: the row starts
/// zero-initialized and uncollected columns are backfilled from the bundle's
/// imputation values before the one-hot location bit is set.
pub fn build_feature_row(
    observation: &UserObservation,
    assets: &AssetBundle,
) -> (FeatureRow, BuildReport) {
    let mut row = FeatureRow::zeroed(&assets.feature_columns);
    let mut report = BuildReport::default();
    let mut covered: HashSet<&str> = HashSet::new();

    // Direct numeric fields, winsorized where the training data recorded
    // bounds for the column
    let numeric_fields = [
        ("MinTemp", observation.min_temp_c),
        ("MaxTemp", observation.max_temp_c),
        ("Rainfall", observation.rainfall_mm),
        ("Sunshine", observation.sunshine_hours),
        ("WindGustSpeed", observation.wind_gust_speed_kmh),
        ("Humidity3pm", observation.humidity_3pm),
        ("Pressure9am", observation.pressure_9am_hpa),
    ];
    for (column, raw) in numeric_fields {
        let value = match assets.bounds_for(column) {
            Some(bounds) => {
                let clamped = bounds.clamp(raw);
                if clamped != raw {
                    report.clamped_fields.push(column.to_string());
                }
                clamped
            }
            None => raw,
        };
        if row.set(column, value) {
            covered.insert(column);
        }
    }

    // Calendar fields derived from the observation date
    let calendar_fields = [
        ("Year", f64::from(observation.date.year())),
        ("Month", f64::from(observation.date.month())),
        ("Day", f64::from(observation.date.day())),
    ];
    for (column, value) in calendar_fields {
        if row.set(column, value) {
            covered.insert(column);
        }
    }

    // Categorical encodings with typed fallbacks
    let rain_today = assets.encode_rain_today(observation.rain_today.as_label());
    if rain_today.is_defaulted() {
        report
            .defaulted_labels
            .push(format!("rain_today={}", observation.rain_today.as_label()));
    }
    if row.set(RAIN_TODAY_COLUMN, rain_today.value()) {
        covered.insert(RAIN_TODAY_COLUMN);
    }

    let wind_dir = assets.encode_wind_dir(&observation.wind_gust_dir);
    if wind_dir.is_defaulted() {
        report
            .defaulted_labels
            .push(format!("wind_gust_dir={}", observation.wind_gust_dir));
    }
    if row.set(WIND_GUST_DIR_COLUMN, wind_dir.value()) {
        covered.insert(WIND_GUST_DIR_COLUMN);
    }

    // Backfill every column the observation does not cover. The model was
    // trained on more features than the form collects; those get the
    // bundle's statistically representative constants. Location columns have
    // no recorded imputation values and stay zero here.
    let pending: Vec<String> = row
        .columns()
        .iter()
        .filter(|column| !covered.contains(column.as_str()))
        .cloned()
        .collect();
    for column in pending {
        if assets.imputation_values.contains_key(&column) {
            report.imputed_columns.push(column.clone());
        }
        let value = assets.imputation_for(&column);
        row.set(&column, value);
    }

    // One-hot location bit. A location absent from the schema sets nothing;
    // the row then encodes "no known location".
    let location_column = AssetBundle::location_column(&observation.location);
    if !row.set(&location_column, 1.0) {
        report.unknown_location = Some(observation.location.clone());
    }

    (row, report)
}

/// Snapshot of the pre-prediction debug checks
///
/// Mirrors the diagnostic panel shown next to a prediction: the row width
/// against the fitted model, and any column holding a non-finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDiagnostics {
    pub column_count: usize,
    pub expected_count: usize,
    pub non_finite_columns: Vec<String>,
}

impl RowDiagnostics {
    /// Inspect a built row against the width the classifier was fitted on
    pub fn inspect(row: &FeatureRow, expected_count: usize) -> Self {
        Self {
            column_count: row.width(),
            expected_count,
            non_finite_columns: row.non_finite_columns(),
        }
    }

    pub fn schema_matches(&self) -> bool {
        self.column_count == self.expected_count
    }

    pub fn is_clean(&self) -> bool {
        self.schema_matches() && self.non_finite_columns.is_empty()
    }
}
