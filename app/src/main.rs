//! Rain Tomorrow - rain prediction from a trained classifier
//!
//! A thin presentation layer over a pre-trained binary classifier: reads a
//! weather observation, rebuilds the fixed feature schema the model was
//! trained on, and reports the classifier's verdict with its probability.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod services;

pub use config::Config;

use error::AppResult;
use services::features::FeatureVectorBuilder;
use services::prediction::PredictionService;
use shared::{observation_warnings, AssetBundle, BuildReport, RainClassifier, RowDiagnostics};

/// Command-line interface for one prediction request
#[derive(Debug, Parser)]
#[command(
    name = "rain-predictor",
    about = "Predict tomorrow's rain from a weather observation"
)]
struct Cli {
    /// Path to the observation JSON file
    observation: PathBuf,

    /// Override the classifier artifact path
    #[arg(long)]
    model: Option<PathBuf>,

    /// Override the preprocessing asset bundle path
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the diagnostic panel even when the build is clean
    #[arg(long)]
    diagnostics: bool,
}

/// Immutable state shared by every prediction request
pub struct AppState {
    pub assets: Arc<AssetBundle>,
    pub model: Arc<RainClassifier>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rain_predictor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = config::Config::load()?;

    tracing::info!("Starting Rain Tomorrow predictor");
    tracing::info!("Environment: {}", config.environment);

    let assets_path = cli
        .assets
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.artifacts.assets_path));
    let model_path = cli
        .model
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.artifacts.model_path));

    let artifacts = services::artifacts::load(&assets_path, &model_path)?;
    let state = AppState {
        assets: artifacts.assets,
        model: artifacts.model,
    };

    run_prediction(&state, &cli)?;
    Ok(())
}

/// Run one synchronous build-then-predict request
fn run_prediction(state: &AppState, cli: &Cli) -> AppResult<()> {
    let observation = services::artifacts::read_observation(&cli.observation)?;

    for warning in observation_warnings(&observation, &state.assets) {
        tracing::warn!("{warning}");
    }

    let builder = FeatureVectorBuilder::new(Arc::clone(&state.assets));
    let (row, report) = builder.build(&observation);

    let diagnostics = RowDiagnostics::inspect(&row, state.model.n_features);
    if cli.diagnostics || !diagnostics.is_clean() {
        print_diagnostics(&diagnostics, &report);
    }

    let predictor = PredictionService::new(Arc::clone(&state.model));
    let forecast = predictor.predict(&row)?;

    println!("{forecast}");
    Ok(())
}

/// Print the diagnostic panel shown next to a prediction
fn print_diagnostics(diagnostics: &RowDiagnostics, report: &BuildReport) {
    println!("Input columns: {}", diagnostics.column_count);
    if !diagnostics.schema_matches() {
        println!(
            "WARNING: column count {} does not match the expected {}!",
            diagnostics.column_count, diagnostics.expected_count
        );
    }
    if !diagnostics.non_finite_columns.is_empty() {
        println!(
            "WARNING: non-finite values in: {}",
            diagnostics.non_finite_columns.join(", ")
        );
    }
    if !report.clamped_fields.is_empty() {
        println!(
            "Clamped to training bounds: {}",
            report.clamped_fields.join(", ")
        );
    }
    if !report.defaulted_labels.is_empty() {
        println!(
            "Labels replaced by default codes: {}",
            report.defaulted_labels.join(", ")
        );
    }
    if let Some(location) = &report.unknown_location {
        println!("Unknown location: {location} (no location column set)");
    }
}
