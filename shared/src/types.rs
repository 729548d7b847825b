//! Common types used across the prediction pipeline

use serde::{Deserialize, Serialize};

/// Inclusive numeric range captured from the winsorized training data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value to this range
    ///
    /// Bounds are validated at artifact load time, so `min <= max` holds here.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Whether the range is well-formed (finite, min not above max)
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Outcome of a categorical label lookup
///
/// The pipeline never rejects an unrecognized label; it substitutes a default
/// code. Keeping the substitution visible in the type lets callers surface it
/// instead of silently losing the signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncodedLabel {
    /// Label was present in the mapping
    Known(f64),
    /// Label was absent; the value is the fixed fallback code
    Defaulted(f64),
}

impl EncodedLabel {
    /// The numeric code, regardless of how it was resolved
    pub fn value(&self) -> f64 {
        match self {
            EncodedLabel::Known(v) | EncodedLabel::Defaulted(v) => *v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, EncodedLabel::Defaulted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_range() {
        let range = ValueRange::new(0.0, 37.4);
        assert_eq!(range.clamp(12.5), 12.5);
    }

    #[test]
    fn test_clamp_at_bounds() {
        let range = ValueRange::new(15.0, 81.0);
        assert_eq!(range.clamp(100.0), 81.0);
        assert_eq!(range.clamp(3.0), 15.0);
        assert_eq!(range.clamp(15.0), 15.0);
        assert_eq!(range.clamp(81.0), 81.0);
    }

    #[test]
    fn test_range_validity() {
        assert!(ValueRange::new(1.8, 25.8).is_valid());
        assert!(!ValueRange::new(25.8, 1.8).is_valid());
        assert!(!ValueRange::new(f64::NAN, 1.0).is_valid());
    }

    #[test]
    fn test_encoded_label_accessors() {
        assert_eq!(EncodedLabel::Known(1.0).value(), 1.0);
        assert_eq!(EncodedLabel::Defaulted(12.0).value(), 12.0);
        assert!(!EncodedLabel::Known(1.0).is_defaulted());
        assert!(EncodedLabel::Defaulted(12.0).is_defaulted());
    }
}
