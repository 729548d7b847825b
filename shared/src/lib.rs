//! Shared types and models for the Rain Tomorrow prediction app
//!
//! This crate contains the domain models, the preprocessing metadata types,
//! and the pure encoding/scoring logic shared between the application binary
//! and its tests.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
