//! Artifact loading for the trained classifier and preprocessing assets
//!
//! Both files are read once at startup and shared read-only afterwards. A
//! loading failure here is the only fatal error in the system. The asset
//! bundle's `feature_columns` is the single authoritative schema; the
//! classifier is checked against it here so a mismatch surfaces at load time
//! instead of on the first request.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use shared::{AssetBundle, RainClassifier, UserObservation};

/// Artifacts loaded at startup, immutable for the process lifetime
pub struct LoadedArtifacts {
    pub assets: Arc<AssetBundle>,
    pub model: Arc<RainClassifier>,
}

/// Load, normalize, and cross-validate both artifacts
pub fn load(assets_path: &Path, model_path: &Path) -> AppResult<LoadedArtifacts> {
    let mut assets: AssetBundle = read_json(assets_path)?;
    assets.normalize();
    validate_assets(&assets)?;

    let model: RainClassifier = read_json(model_path)?;
    validate_model_against_schema(&model, &assets)?;

    tracing::info!(
        columns = assets.feature_columns.len(),
        locations = assets.locations.len(),
        "Artifacts loaded"
    );

    Ok(LoadedArtifacts {
        assets: Arc::new(assets),
        model: Arc::new(model),
    })
}

/// Read one observation JSON file
pub fn read_observation(path: &Path) -> AppResult<UserObservation> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Check bundle integrity after normalization
fn validate_assets(assets: &AssetBundle) -> AppResult<()> {
    if assets.feature_columns.is_empty() {
        return Err(AppError::InvalidAssets(
            "feature schema is empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for column in &assets.feature_columns {
        if !seen.insert(column.as_str()) {
            return Err(AppError::InvalidAssets(format!(
                "duplicate schema column '{column}'"
            )));
        }
    }

    for (column, bounds) in &assets.winsor_bounds {
        if !bounds.is_valid() {
            return Err(AppError::InvalidAssets(format!(
                "invalid winsor bounds for '{column}'"
            )));
        }
    }

    for (column, value) in &assets.imputation_values {
        if !value.is_finite() {
            return Err(AppError::InvalidAssets(format!(
                "non-finite imputation value for '{column}'"
            )));
        }
    }

    Ok(())
}

/// The fitted model must agree with the bundle's schema width
fn validate_model_against_schema(
    model: &RainClassifier,
    assets: &AssetBundle,
) -> AppResult<()> {
    let expected = assets.feature_columns.len();
    if model.n_features != expected {
        return Err(AppError::SchemaMismatch {
            expected,
            actual: model.n_features,
        });
    }
    if model.coefficients.len() != model.n_features {
        return Err(AppError::SchemaMismatch {
            expected: model.n_features,
            actual: model.coefficients.len(),
        });
    }
    if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
        return Err(AppError::InvalidAssets(
            "classifier contains non-finite parameters".to_string(),
        ));
    }
    Ok(())
}
