//! Fitting the four target estimators from a synthetic corpus.
//!
//! Each indicator gets its own independently fitted estimator over the shared
//! feature vector. GDP, inflation and unemployment use the interaction basis;
//! the environmental target uses the plain linear basis. The four fits are
//! independent, so they run in parallel.
//!
//! A `TrainedModel` is built exactly once per `train` call and never mutated
//! afterwards; concurrent readers share it freely.

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use crate::data::corpus_stats;
use crate::domain::{CorpusStats, FeatureVector, FitQuality, Indicator, TrainingSample};
use crate::error::AppError;
use crate::math::solve_least_squares;
use crate::models::{EstimatorKind, fill_design_row, predict};

/// Minimum number of extra observations beyond coefficient count.
const MIN_N_BUFFER: usize = 5;

/// Which basis each indicator is fitted with.
pub fn estimator_kind_for(indicator: Indicator) -> EstimatorKind {
    match indicator {
        Indicator::Gdp | Indicator::Inflation | Indicator::Unemployment => {
            EstimatorKind::Interaction
        }
        Indicator::Environment => EstimatorKind::Linear,
    }
}

/// One fitted target estimator.
#[derive(Debug, Clone)]
pub struct FittedEstimator {
    pub indicator: Indicator,
    pub kind: EstimatorKind,
    pub betas: Vec<f64>,
    pub quality: FitQuality,
}

impl FittedEstimator {
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        predict(self.kind, features, &self.betas)
    }
}

/// The immutable result of a training run: one estimator per indicator.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    estimators: [FittedEstimator; 4],
    stats: CorpusStats,
}

impl TrainedModel {
    pub fn estimator(&self, indicator: Indicator) -> &FittedEstimator {
        let idx = match indicator {
            Indicator::Gdp => 0,
            Indicator::Inflation => 1,
            Indicator::Unemployment => 2,
            Indicator::Environment => 3,
        };
        &self.estimators[idx]
    }

    pub fn estimators(&self) -> &[FittedEstimator; 4] {
        &self.estimators
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    /// Predict all four indicators for one feature vector.
    ///
    /// Order: GDP, inflation, unemployment, environment.
    pub fn predict_all(&self, features: &FeatureVector) -> Result<[f64; 4], AppError> {
        let mut out = [0.0; 4];
        for (slot, est) in out.iter_mut().zip(&self.estimators) {
            let y = est.predict(features);
            if !y.is_finite() {
                return Err(AppError::internal(format!(
                    "Non-finite {} prediction.",
                    est.indicator.display_name()
                )));
            }
            *slot = y;
        }
        Ok(out)
    }
}

/// Fit all four estimators from a synthetic corpus.
pub fn train_model(samples: &[TrainingSample]) -> Result<TrainedModel, AppError> {
    let stats =
        corpus_stats(samples).ok_or_else(|| AppError::data("Empty training corpus."))?;

    let fitted: Result<Vec<FittedEstimator>, AppError> = Indicator::ALL
        .into_par_iter()
        .map(|indicator| fit_target(indicator, samples))
        .collect();
    let fitted = fitted?;

    let estimators: [FittedEstimator; 4] = fitted
        .try_into()
        .map_err(|_| AppError::internal("Unexpected estimator count after fit."))?;

    Ok(TrainedModel { estimators, stats })
}

/// Fit a single target estimator.
fn fit_target(indicator: Indicator, samples: &[TrainingSample]) -> Result<FittedEstimator, AppError> {
    let kind = estimator_kind_for(indicator);
    let n = samples.len();
    let p = kind.beta_len();

    if n < p + MIN_N_BUFFER {
        return Err(AppError::data(format!(
            "Underdetermined {} fit: n={n} < p+{MIN_N_BUFFER}={}.",
            indicator.display_name(),
            p + MIN_N_BUFFER
        )));
    }

    let mut design = DMatrix::zeros(n, p);
    let mut y = DVector::zeros(n);
    let mut row = vec![0.0; p];
    for (i, sample) in samples.iter().enumerate() {
        fill_design_row(kind, &sample.features(), &mut row);
        for (j, v) in row.iter().enumerate() {
            design[(i, j)] = *v;
        }
        y[i] = sample.target(indicator);
    }

    let betas = solve_least_squares(&design, &y).ok_or_else(|| {
        AppError::internal(format!(
            "Degenerate design matrix for {} fit.",
            indicator.display_name()
        ))
    })?;

    let residual = &design * &betas - &y;
    let sse = residual.iter().map(|r| r * r).sum::<f64>();
    if !sse.is_finite() {
        return Err(AppError::internal(format!(
            "Non-finite residuals for {} fit.",
            indicator.display_name()
        )));
    }
    let rmse = (sse / n as f64).sqrt();

    Ok(FittedEstimator {
        indicator,
        kind,
        betas: betas.iter().copied().collect(),
        quality: FitQuality { sse, rmse, n },
    })
}
