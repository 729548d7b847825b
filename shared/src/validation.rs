//! Validation utilities for weather observations
//!
//! All checks here are diagnostic-only: the prediction pipeline never rejects
//! an observation, it surfaces warnings alongside the result and proceeds.

use validator::Validate;

use crate::models::{AssetBundle, UserObservation};

// ============================================================================
// Field Range Checks
// ============================================================================

/// Validate relative humidity is a percentage
pub fn validate_humidity(percent: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&percent) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

/// Validate rainfall is non-negative
pub fn validate_rainfall(millimeters: f64) -> Result<(), &'static str> {
    if millimeters < 0.0 {
        return Err("Rainfall cannot be negative");
    }
    Ok(())
}

/// Validate sunshine hours fit in a day's daylight
pub fn validate_sunshine_hours(hours: f64) -> Result<(), &'static str> {
    if !(0.0..=15.0).contains(&hours) {
        return Err("Sunshine hours must be between 0 and 15");
    }
    Ok(())
}

/// Validate sea-level pressure is physically plausible
pub fn validate_pressure(hectopascals: f64) -> Result<(), &'static str> {
    if !(900.0..=1100.0).contains(&hectopascals) {
        return Err("Pressure must be between 900 and 1100 hPa");
    }
    Ok(())
}

/// Validate the minimum temperature does not exceed the maximum
pub fn validate_temperature_order(min_c: f64, max_c: f64) -> Result<(), &'static str> {
    if min_c > max_c {
        return Err("Minimum temperature exceeds maximum temperature");
    }
    Ok(())
}

// ============================================================================
// Observation Diagnostics
// ============================================================================

/// Collect every warning an observation would trigger
///
/// Flattens the derive-level range annotations, then adds the cross-field and
/// categorical-membership checks the derive cannot express. The caller shows
/// these next to the prediction; nothing here blocks it.
pub fn observation_warnings(observation: &UserObservation, assets: &AssetBundle) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Err(errors) = observation.validate() {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                match &error.message {
                    Some(message) => warnings.push(format!("{field}: {message}")),
                    None => warnings.push(format!("{field}: value outside the expected range")),
                }
            }
        }
    }

    if let Err(message) =
        validate_temperature_order(observation.min_temp_c, observation.max_temp_c)
    {
        warnings.push(message.to_string());
    }

    if !assets.is_known_location(&observation.location) {
        warnings.push(format!(
            "Location '{}' is not in the training data; no location column will be set",
            observation.location
        ));
    }

    if !assets.wind_mapping.contains_key(&observation.wind_gust_dir) {
        warnings.push(format!(
            "Wind direction '{}' is not in the training data; a default code will be used",
            observation.wind_gust_dir
        ));
    }

    warnings
}
