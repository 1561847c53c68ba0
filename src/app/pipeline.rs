//! Shared "estimation pipeline" logic used by every front-end command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! corpus synthesis -> multi-target fit -> inference -> comparables
//!
//! The CLI then focuses on presentation (printing and exports).

use std::sync::Arc;

use crate::data::history::{HistoricalPolicy, comparables};
use crate::domain::{EngineConfig, PolicyInput, PredictionResult};
use crate::engine::Engine;
use crate::error::AppError;
use crate::fit::TrainedModel;

/// All computed outputs of a single `impact predict` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub model: Arc<TrainedModel>,
    pub result: PredictionResult,
    pub comparables: Vec<&'static HistoricalPolicy>,
}

/// Train a model and estimate one policy scenario.
///
/// Unlike the long-lived engine embedding (where prediction degrades to the
/// fallback result), a one-shot CLI run surfaces training failure as a hard
/// error: there is nothing useful to print from an untrained model.
pub fn run_predict(
    config: &EngineConfig,
    input: &PolicyInput,
    noise_seed: Option<u64>,
    top_n: usize,
) -> Result<RunOutput, AppError> {
    let engine = Engine::new(*config);
    let model = engine.train()?;

    let result = match noise_seed {
        Some(seed) => engine.predict_impact_seeded(input, seed),
        None => engine.predict_impact(input),
    };

    Ok(RunOutput {
        model,
        result,
        comparables: comparables(input.sector, top_n),
    })
}

/// Train a model only (for diagnostics output).
pub fn run_fit(config: &EngineConfig) -> Result<Arc<TrainedModel>, AppError> {
    Engine::new(*config).train()
}
