//! Preprocessing asset bundle captured at training time

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{EncodedLabel, ValueRange};

/// Code substituted when a wind direction label is missing from the mapping
pub const WIND_DIR_FALLBACK_CODE: i64 = 12;

/// Code substituted when a rain-today label is missing from the mapping
pub const RAIN_TODAY_FALLBACK_CODE: i64 = 0;

/// Bundle of preprocessing metadata the classifier was trained against
///
/// Loaded once at startup alongside the model and treated as read-only for
/// the rest of the process. The `feature_columns` list is the authoritative
/// schema; the classifier is checked against it at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBundle {
    /// Ordered column schema the classifier expects
    pub feature_columns: Vec<String>,
    /// Locations known to the one-hot encoder
    pub locations: Vec<String>,
    /// Compass direction label to integer code (16 directions)
    pub wind_mapping: HashMap<String, i64>,
    /// "No"/"Yes" to 0/1
    pub rain_mapping: HashMap<String, i64>,
    /// Per-column fallback constants for features the form does not collect
    pub imputation_values: HashMap<String, f64>,
    /// Per-column winsorization bounds captured from the training data
    #[serde(default)]
    pub winsor_bounds: HashMap<String, ValueRange>,
}

impl AssetBundle {
    /// Resolve the historical space-vs-underscore naming drift
    ///
    /// Some exports of the training schema spell encoded columns with spaces
    /// ("WindGustDir Encoded"), others with underscores. Normalizing once at
    /// load time means no per-request branching on spelling.
    pub fn normalize(&mut self) {
        for column in &mut self.feature_columns {
            if column.contains(' ') {
                *column = normalize_column(column);
            }
        }
        self.imputation_values = std::mem::take(&mut self.imputation_values)
            .into_iter()
            .map(|(k, v)| (normalize_column(&k), v))
            .collect();
        self.winsor_bounds = std::mem::take(&mut self.winsor_bounds)
            .into_iter()
            .map(|(k, v)| (normalize_column(&k), v))
            .collect();
    }

    /// Encode the rain-today label through the trained mapping
    pub fn encode_rain_today(&self, label: &str) -> EncodedLabel {
        match self.rain_mapping.get(label) {
            Some(code) => EncodedLabel::Known(*code as f64),
            None => EncodedLabel::Defaulted(RAIN_TODAY_FALLBACK_CODE as f64),
        }
    }

    /// Encode a compass direction label through the trained mapping
    pub fn encode_wind_dir(&self, label: &str) -> EncodedLabel {
        match self.wind_mapping.get(label) {
            Some(code) => EncodedLabel::Known(*code as f64),
            None => EncodedLabel::Defaulted(WIND_DIR_FALLBACK_CODE as f64),
        }
    }

    /// Recorded imputation value for a column, or 0 when none was captured
    pub fn imputation_for(&self, column: &str) -> f64 {
        self.imputation_values.get(column).copied().unwrap_or(0.0)
    }

    /// Winsorization bounds for a column, when the training data recorded any
    pub fn bounds_for(&self, column: &str) -> Option<ValueRange> {
        self.winsor_bounds.get(column).copied()
    }

    pub fn is_known_location(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l == name)
    }

    /// One-hot column name for a location
    pub fn location_column(name: &str) -> String {
        format!("Location_{name}")
    }
}

/// Replace every space in a column name with an underscore
fn normalize_column(name: &str) -> String {
    name.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> AssetBundle {
        AssetBundle {
            feature_columns: vec![
                "Rainfall".to_string(),
                "WindGustDir Encoded".to_string(),
                "Location_Sydney".to_string(),
            ],
            locations: vec!["Sydney".to_string(), "Perth".to_string()],
            wind_mapping: HashMap::from([("N".to_string(), 3), ("SSW".to_string(), 10)]),
            rain_mapping: HashMap::from([("No".to_string(), 0), ("Yes".to_string(), 1)]),
            imputation_values: HashMap::from([("WindDir9am Encoded".to_string(), 7.0)]),
            winsor_bounds: HashMap::from([(
                "Rainfall".to_string(),
                ValueRange::new(0.0, 37.4),
            )]),
        }
    }

    #[test]
    fn test_normalize_rewrites_spaces_everywhere() {
        let mut bundle = bundle();
        bundle.normalize();
        assert!(bundle
            .feature_columns
            .contains(&"WindGustDir_Encoded".to_string()));
        assert_eq!(bundle.imputation_for("WindDir9am_Encoded"), 7.0);
        assert!(bundle.bounds_for("Rainfall").is_some());
    }

    #[test]
    fn test_normalize_preserves_column_order() {
        let mut bundle = bundle();
        bundle.normalize();
        assert_eq!(bundle.feature_columns[0], "Rainfall");
        assert_eq!(bundle.feature_columns[1], "WindGustDir_Encoded");
        assert_eq!(bundle.feature_columns[2], "Location_Sydney");
    }

    #[test]
    fn test_encode_rain_today_known() {
        let bundle = bundle();
        assert_eq!(bundle.encode_rain_today("Yes"), EncodedLabel::Known(1.0));
        assert_eq!(bundle.encode_rain_today("No"), EncodedLabel::Known(0.0));
    }

    #[test]
    fn test_encode_rain_today_unknown_defaults_to_zero() {
        let bundle = bundle();
        assert_eq!(
            bundle.encode_rain_today("Maybe"),
            EncodedLabel::Defaulted(0.0)
        );
    }

    #[test]
    fn test_encode_wind_dir_unknown_defaults_to_fallback_code() {
        let bundle = bundle();
        assert_eq!(bundle.encode_wind_dir("N"), EncodedLabel::Known(3.0));
        assert_eq!(
            bundle.encode_wind_dir("UP"),
            EncodedLabel::Defaulted(WIND_DIR_FALLBACK_CODE as f64)
        );
    }

    #[test]
    fn test_imputation_defaults_to_zero_when_unrecorded() {
        let bundle = bundle();
        assert_eq!(bundle.imputation_for("Cloud9am"), 0.0);
    }

    #[test]
    fn test_location_helpers() {
        let bundle = bundle();
        assert!(bundle.is_known_location("Sydney"));
        assert!(!bundle.is_known_location("Atlantis"));
        assert_eq!(AssetBundle::location_column("Perth"), "Location_Perth");
    }

    #[test]
    fn test_bundle_deserializes_without_bounds() {
        // Older bundles predate the winsor_bounds section
        let json = r#"{
            "feature_columns": ["Rainfall"],
            "locations": ["Sydney"],
            "wind_mapping": {"N": 3},
            "rain_mapping": {"No": 0, "Yes": 1},
            "imputation_values": {}
        }"#;
        let bundle: AssetBundle = serde_json::from_str(json).unwrap();
        assert!(bundle.winsor_bounds.is_empty());
    }
}
