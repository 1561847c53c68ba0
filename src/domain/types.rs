//! Shared domain types.
//!
//! These types are intentionally lightweight and serializable so they can be:
//!
//! - used in-memory during training and inference
//! - exported to JSON/CSV
//! - constructed by any front-end (CLI today, a service layer tomorrow)

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Economic sector a policy primarily targets.
///
/// The discriminant order is load-bearing: it defines the categorical index
/// fed to the regressors (`Sector::index`), so it must stay stable across
/// training and inference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Energy,
    Healthcare,
    Education,
    Transportation,
    Agriculture,
    Finance,
    Technology,
    Manufacturing,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::Energy,
        Sector::Healthcare,
        Sector::Education,
        Sector::Transportation,
        Sector::Agriculture,
        Sector::Finance,
        Sector::Technology,
        Sector::Manufacturing,
    ];

    /// Stable categorical index used as a model feature.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label for terminal output and exports.
    pub fn display_name(self) -> &'static str {
        match self {
            Sector::Energy => "Energy",
            Sector::Healthcare => "Healthcare",
            Sector::Education => "Education",
            Sector::Transportation => "Transportation",
            Sector::Agriculture => "Agriculture",
            Sector::Finance => "Finance",
            Sector::Technology => "Technology",
            Sector::Manufacturing => "Manufacturing",
        }
    }

    /// Resolve a free-form label (case-insensitive).
    ///
    /// Unknown labels fall back to the first sector (index 0) rather than
    /// failing: the engine degrades gracefully on unvalidated input and
    /// leaves strict validation to the boundary.
    pub fn from_label(label: &str) -> Sector {
        Sector::ALL
            .into_iter()
            .find(|s| s.display_name().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Sector::ALL[0])
    }
}

/// Geographic region a policy applies to.
///
/// As with `Sector`, the discriminant order defines the categorical index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NorthAmerica,
    Europe,
    Asia,
    Africa,
    SouthAmerica,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::SouthAmerica,
        Region::Oceania,
    ];

    /// Stable categorical index used as a model feature.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label for terminal output and exports.
    pub fn display_name(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
        }
    }

    /// Resolve a free-form label (case-insensitive), falling back to index 0.
    pub fn from_label(label: &str) -> Region {
        Region::ALL
            .into_iter()
            .find(|r| r.display_name().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Region::ALL[0])
    }
}

/// A single policy scenario to estimate.
///
/// Constructed per request and never mutated. Range validation is the
/// boundary's job (`PolicyInput::validated`); the engine itself accepts any
/// finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyInput {
    pub sector: Sector,
    pub region: Region,
    /// Signed policy magnitude in percent.
    pub numeric_change: f64,
    /// Policy horizon in months.
    pub time_period_months: u32,
}

impl PolicyInput {
    /// Validate boundary ranges: `numeric_change ∈ [-100, 100]`,
    /// `time_period ∈ [1, 120]` months.
    pub fn validated(
        sector: Sector,
        region: Region,
        numeric_change: f64,
        time_period_months: u32,
    ) -> Result<PolicyInput, crate::error::AppError> {
        if !numeric_change.is_finite() || !(-100.0..=100.0).contains(&numeric_change) {
            return Err(crate::error::AppError::usage(format!(
                "Policy change must be between -100% and 100% (got {numeric_change})."
            )));
        }
        if !(1..=120).contains(&time_period_months) {
            return Err(crate::error::AppError::usage(format!(
                "Time period must be between 1 and 120 months (got {time_period_months})."
            )));
        }
        Ok(PolicyInput {
            sector,
            region,
            numeric_change,
            time_period_months,
        })
    }
}

/// The 4-dimensional feature vector consumed by every estimator:
/// `[numeric_change, time_period, sector_index, region_index]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub numeric_change: f64,
    pub time_period: f64,
    pub sector_index: usize,
    pub region_index: usize,
}

impl FeatureVector {
    pub fn from_input(input: &PolicyInput) -> FeatureVector {
        FeatureVector {
            numeric_change: input.numeric_change,
            time_period: f64::from(input.time_period_months),
            sector_index: input.sector.index(),
            region_index: input.region.index(),
        }
    }
}

/// One of the four target indicators the engine estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Gdp,
    Inflation,
    Unemployment,
    Environment,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::Gdp,
        Indicator::Inflation,
        Indicator::Unemployment,
        Indicator::Environment,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP",
            Indicator::Inflation => "Inflation",
            Indicator::Unemployment => "Unemployment",
            Indicator::Environment => "Environment",
        }
    }
}

/// A synthesized, labeled training row. Never persisted beyond the fit.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSample {
    pub numeric_change: f64,
    pub time_period: f64,
    pub sector_index: usize,
    pub region_index: usize,
    pub gdp_impact: f64,
    pub inflation_impact: f64,
    pub unemployment_impact: f64,
    pub environmental_impact: f64,
}

impl TrainingSample {
    pub fn features(&self) -> FeatureVector {
        FeatureVector {
            numeric_change: self.numeric_change,
            time_period: self.time_period,
            sector_index: self.sector_index,
            region_index: self.region_index,
        }
    }

    pub fn target(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Gdp => self.gdp_impact,
            Indicator::Inflation => self.inflation_impact,
            Indicator::Unemployment => self.unemployment_impact,
            Indicator::Environment => self.environmental_impact,
        }
    }
}

/// Summary statistics of a synthesized corpus (for diagnostics output).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorpusStats {
    pub n_samples: usize,
    pub change_min: f64,
    pub change_max: f64,
    pub period_min: f64,
    pub period_max: f64,
}

/// Fit quality diagnostics for one target estimator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// Engine configuration: how the synthetic corpus is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of synthetic training samples.
    pub sample_count: usize,
    /// Explicit corpus seed; `None` derives one from process entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            sample_count: 1000,
            seed: None,
        }
    }
}

/// Per-sector slice of a prediction's breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorImpact {
    pub gdp_impact: f64,
    pub employment_impact: f64,
    pub impact_percentage: f64,
}

/// The engine's complete answer for one policy scenario.
///
/// Impacts are rounded to 2 decimal places; `confidence_score` is clamped to
/// `[0.3, 1.0]` and `sentiment_score` to `[-1, 1]`. The breakdown shares are
/// independently randomized and deliberately not normalized to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub gdp_impact: f64,
    pub inflation_impact: f64,
    pub unemployment_impact: f64,
    pub environmental_impact: f64,
    pub confidence_score: f64,
    pub sentiment_score: f64,
    pub sentiment_confidence: f64,
    pub sector_breakdown: BTreeMap<Sector, SectorImpact>,
}

impl PredictionResult {
    /// The documented degraded result returned whenever training or
    /// inference fails internally. Structurally valid, never an error.
    pub fn fallback() -> PredictionResult {
        PredictionResult {
            gdp_impact: 0.0,
            inflation_impact: 0.0,
            unemployment_impact: 0.0,
            environmental_impact: 0.0,
            confidence_score: 0.5,
            sentiment_score: 0.0,
            sentiment_confidence: 0.5,
            sector_breakdown: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_indices_are_stable() {
        assert_eq!(Sector::Energy.index(), 0);
        assert_eq!(Sector::Manufacturing.index(), 7);
        for (i, s) in Sector::ALL.into_iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_index_zero() {
        assert_eq!(Sector::from_label("Quantum Mining"), Sector::Energy);
        assert_eq!(Region::from_label("Atlantis"), Region::NorthAmerica);
        // Known labels resolve regardless of case.
        assert_eq!(Sector::from_label("technology"), Sector::Technology);
        assert_eq!(Region::from_label("south america"), Region::SouthAmerica);
    }

    #[test]
    fn input_validation_enforces_boundary_ranges() {
        assert!(PolicyInput::validated(Sector::Finance, Region::Europe, 100.0, 120).is_ok());
        assert!(PolicyInput::validated(Sector::Finance, Region::Europe, 101.0, 12).is_err());
        assert!(PolicyInput::validated(Sector::Finance, Region::Europe, 10.0, 0).is_err());
        assert!(PolicyInput::validated(Sector::Finance, Region::Europe, f64::NAN, 12).is_err());
    }

    #[test]
    fn fallback_result_matches_documented_defaults() {
        let r = PredictionResult::fallback();
        assert_eq!(r.gdp_impact, 0.0);
        assert_eq!(r.confidence_score, 0.5);
        assert_eq!(r.sentiment_score, 0.0);
        assert!(r.sector_breakdown.is_empty());
    }
}
