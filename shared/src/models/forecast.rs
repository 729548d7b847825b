//! Prediction result presented to the user

use serde::{Deserialize, Serialize};

/// Hard classification verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainVerdict {
    Rain,
    Clear,
}

/// Result of one prediction request
#[derive(Debug, Clone, Serialize)]
pub struct RainForecast {
    pub verdict: RainVerdict,
    /// Probability of the positive (rain) class, in [0, 1]
    pub rain_probability: f64,
}

impl RainForecast {
    pub fn new(verdict: RainVerdict, rain_probability: f64) -> Self {
        Self {
            verdict,
            rain_probability,
        }
    }

    /// User-facing message with the probability as a percentage
    pub fn message(&self) -> String {
        let percent = self.rain_probability * 100.0;
        match self.verdict {
            RainVerdict::Rain => {
                format!("Rain expected tomorrow (probability: {percent:.1}%)")
            }
            RainVerdict::Clear => {
                format!("Clear skies expected tomorrow (rain probability: {percent:.1}%)")
            }
        }
    }
}

impl std::fmt::Display for RainForecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_message_formats_percentage() {
        let forecast = RainForecast::new(RainVerdict::Rain, 0.724);
        assert_eq!(
            forecast.message(),
            "Rain expected tomorrow (probability: 72.4%)"
        );
    }

    #[test]
    fn test_clear_message_reports_rain_probability() {
        let forecast = RainForecast::new(RainVerdict::Clear, 0.123);
        assert_eq!(
            forecast.message(),
            "Clear skies expected tomorrow (rain probability: 12.3%)"
        );
    }

    #[test]
    fn test_display_matches_message() {
        let forecast = RainForecast::new(RainVerdict::Rain, 0.5);
        assert_eq!(forecast.to_string(), forecast.message());
    }
}
