//! User-submitted weather observation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rain-today flag as collected from the form
///
/// Serializes as the bare labels `"No"` / `"Yes"`, matching the keys of the
/// bundle's rain mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RainToday {
    No,
    Yes,
}

impl RainToday {
    /// The mapping key this flag looks up
    pub fn as_label(&self) -> &'static str {
        match self {
            RainToday::No => "No",
            RainToday::Yes => "Yes",
        }
    }
}

/// A single weather observation submitted for prediction
///
/// One of these is constructed per request and discarded afterwards. The
/// `validator` ranges mirror what the form widgets allow; violations are
/// surfaced as warnings only, never rejections.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserObservation {
    /// Observation date; Year/Month/Day features are derived from it
    pub date: NaiveDate,
    /// Location name, expected to be one of the bundle's known locations
    pub location: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity_3pm: f64,
    #[validate(range(min = 0.0))]
    pub rainfall_mm: f64,
    #[validate(range(min = 0.0, max = 15.0))]
    pub sunshine_hours: f64,
    #[validate(range(min = 0.0))]
    pub wind_gust_speed_kmh: f64,
    /// Compass label, expected to be a key of the bundle's wind mapping
    pub wind_gust_dir: String,
    #[validate(range(min = 900.0, max = 1100.0))]
    pub pressure_9am_hpa: f64,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub rain_today: RainToday,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use validator::Validate;

    fn observation() -> UserObservation {
        UserObservation {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            location: "Sydney".to_string(),
            humidity_3pm: 80.0,
            rainfall_mm: 4.2,
            sunshine_hours: 6.5,
            wind_gust_speed_kmh: 40.0,
            wind_gust_dir: "N".to_string(),
            pressure_9am_hpa: 1012.0,
            min_temp_c: 17.0,
            max_temp_c: 26.0,
            rain_today: RainToday::No,
        }
    }

    #[test]
    fn test_rain_today_labels() {
        assert_eq!(RainToday::No.as_label(), "No");
        assert_eq!(RainToday::Yes.as_label(), "Yes");
    }

    #[test]
    fn test_rain_today_serde_labels() {
        assert_eq!(serde_json::to_string(&RainToday::Yes).unwrap(), "\"Yes\"");
        let parsed: RainToday = serde_json::from_str("\"No\"").unwrap();
        assert_eq!(parsed, RainToday::No);
    }

    #[test]
    fn test_observation_in_range_validates() {
        assert!(observation().validate().is_ok());
    }

    #[test]
    fn test_observation_out_of_range_flags_field() {
        let mut obs = observation();
        obs.humidity_3pm = 140.0;
        let errors = obs.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("humidity_3pm"));
    }

    #[test]
    fn test_observation_round_trips_through_json() {
        let obs = observation();
        let json = serde_json::to_string(&obs).unwrap();
        let back: UserObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.location, obs.location);
        assert_eq!(back.date, obs.date);
        assert_eq!(back.rain_today, obs.rain_today);
    }
}
