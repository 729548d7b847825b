//! Business services for the Rain Tomorrow predictor

pub mod artifacts;
pub mod features;
pub mod prediction;
