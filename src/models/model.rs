//! Design-row construction and prediction per estimator kind.
//!
//! All estimators consume the same 4-dimensional feature vector
//! `[numeric_change, time_period, sector_index, region_index]`; they differ
//! only in the basis expansion applied before the linear solve:
//!
//! - `Interaction` expands the categorical indices into one-hot blocks
//!   interacted with `numeric_change`, `|numeric_change|`, and
//!   `max(numeric_change, 0)`. This captures per-sector slopes, the
//!   magnitude-driven inflation response, and the sign-dependent
//!   unemployment kink.
//! - `Linear` regresses on the raw features, intercept included. Used for
//!   the environmental target, which is kept deliberately simple and
//!   interpretable.

use crate::domain::{FeatureVector, Region, Sector};

const N_SECTORS: usize = Sector::ALL.len();
const N_REGIONS: usize = Region::ALL.len();

/// Which basis expansion an estimator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatorKind {
    Interaction,
    Linear,
}

impl EstimatorKind {
    /// Human-readable label for diagnostics output.
    pub fn display_name(self) -> &'static str {
        match self {
            EstimatorKind::Interaction => "interaction",
            EstimatorKind::Linear => "linear",
        }
    }

    /// Number of coefficients (= design-row width) for this kind.
    pub fn beta_len(self) -> usize {
        match self {
            // intercept + time_period + three sector blocks + two region blocks
            EstimatorKind::Interaction => 2 + 3 * N_SECTORS + 2 * N_REGIONS,
            // intercept + the four raw features
            EstimatorKind::Linear => 5,
        }
    }
}

/// Fill a design row for the given estimator kind.
///
/// The row includes the constant term first (intercept).
///
/// # Panics
/// Panics if `out` does not have length `kind.beta_len()` or if the feature
/// indices are out of range. Callers size these from the same enums that
/// produced the indices.
pub fn fill_design_row(kind: EstimatorKind, f: &FeatureVector, out: &mut [f64]) {
    assert_eq!(out.len(), kind.beta_len());
    match kind {
        EstimatorKind::Interaction => {
            out.fill(0.0);
            let nc = f.numeric_change;
            out[0] = 1.0;
            out[1] = f.time_period;

            let s = f.sector_index;
            let r = f.region_index;
            out[2 + s] = nc;
            out[2 + N_SECTORS + s] = nc.abs();
            out[2 + 2 * N_SECTORS + s] = nc.max(0.0);
            out[2 + 3 * N_SECTORS + r] = nc;
            out[2 + 3 * N_SECTORS + N_REGIONS + r] = nc.abs();
        }
        EstimatorKind::Linear => {
            out[0] = 1.0;
            out[1] = f.numeric_change;
            out[2] = f.time_period;
            out[3] = f.sector_index as f64;
            out[4] = f.region_index as f64;
        }
    }
}

/// Predict the target value for a feature vector given fitted coefficients.
pub fn predict(kind: EstimatorKind, f: &FeatureVector, betas: &[f64]) -> f64 {
    let mut row = vec![0.0; kind.beta_len()];
    fill_design_row(kind, f, &mut row);
    row.iter().zip(betas).map(|(x, b)| x * b).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> FeatureVector {
        FeatureVector {
            numeric_change: -12.5,
            time_period: 24.0,
            sector_index: Sector::Finance.index(),
            region_index: Region::Asia.index(),
        }
    }

    #[test]
    fn interaction_row_places_one_hot_blocks() {
        let f = features();
        let kind = EstimatorKind::Interaction;
        let mut row = vec![0.0; kind.beta_len()];
        fill_design_row(kind, &f, &mut row);

        assert_eq!(row[0], 1.0);
        assert_eq!(row[1], 24.0);
        assert_eq!(row[2 + f.sector_index], -12.5);
        assert_eq!(row[2 + N_SECTORS + f.sector_index], 12.5);
        // Negative change: the positive-part block stays zero.
        assert_eq!(row[2 + 2 * N_SECTORS + f.sector_index], 0.0);
        assert_eq!(row[2 + 3 * N_SECTORS + f.region_index], -12.5);

        // Exactly one entry per one-hot block is populated.
        let sector_block = &row[2..2 + N_SECTORS];
        assert_eq!(sector_block.iter().filter(|v| **v != 0.0).count(), 1);
    }

    #[test]
    fn linear_row_uses_raw_features() {
        let f = features();
        let mut row = vec![0.0; EstimatorKind::Linear.beta_len()];
        fill_design_row(EstimatorKind::Linear, &f, &mut row);
        assert_eq!(row, vec![1.0, -12.5, 24.0, 5.0, 2.0]);
    }

    #[test]
    fn predict_matches_manual_dot_product() {
        let f = features();
        let kind = EstimatorKind::Linear;
        let betas = [0.5, 0.1, -0.2, 1.0, 2.0];
        let expected = 0.5 + 0.1 * -12.5 + -0.2 * 24.0 + 1.0 * 5.0 + 2.0 * 2.0;
        assert!((predict(kind, &f, &betas) - expected).abs() < 1e-12);
    }
}
