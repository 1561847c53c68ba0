//! Derived outputs: confidence, sentiment, and the sector breakdown.
//!
//! These are heuristics layered on top of the regression outputs:
//!
//! - confidence is a rule-based trustworthiness score, not a calibrated
//!   statistical interval
//! - sentiment is a fixed linear combination of the other impacts plus noise
//! - the breakdown is a randomized descriptive decomposition whose shares
//!   are intentionally not normalized to sum to 100

use std::collections::BTreeMap;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::data::profiles::interconnectedness;
use crate::domain::{Sector, SectorImpact};
use crate::error::AppError;

/// Fixed confidence attached to every sentiment estimate.
pub const SENTIMENT_CONFIDENCE: f64 = 0.7;

/// Round to 2 decimal places (the precision of every reported impact).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Rule-based confidence in `[0.3, 1.0]`.
///
/// Starts at 0.8; extreme magnitudes and long horizons reduce it, and the
/// historically well-behaved sectors raise it.
pub fn confidence_score(sector: Sector, numeric_change: f64, time_period_months: u32) -> f64 {
    let mut confidence: f64 = 0.8;

    if numeric_change.abs() > 30.0 {
        confidence -= 0.2;
    }
    if time_period_months > 36 {
        confidence -= 0.15;
    }
    match sector {
        Sector::Finance | Sector::Technology => confidence += 0.1,
        Sector::Agriculture | Sector::Energy => confidence -= 0.1,
        _ => {}
    }

    confidence.clamp(0.3, 1.0)
}

/// Sentiment in `[-1, 1]` from the three macro impacts plus Gaussian noise.
pub fn estimate_sentiment(
    gdp_impact: f64,
    unemployment_impact: f64,
    inflation_impact: f64,
    rng: &mut StdRng,
) -> Result<f64, AppError> {
    let noise = Normal::new(0.0, 0.1)
        .map_err(|e| AppError::internal(format!("Sentiment noise distribution error: {e}")))?;

    let sentiment = 0.3 * gdp_impact - 0.4 * unemployment_impact - 0.3 * inflation_impact
        + noise.sample(rng);

    Ok(sentiment.clamp(-1.0, 1.0))
}

/// Decompose a prediction across all eight sectors.
///
/// The primary sector gets a share of `0.5 ± U(0, 0.1)`; every other sector
/// gets `interconnectedness * 0.1 + U(0, 0.05)`. Shares are independent
/// draws, so they do not sum to 1.
pub fn sector_breakdown(
    primary: Sector,
    gdp_impact: f64,
    unemployment_impact: f64,
    rng: &mut StdRng,
) -> BTreeMap<Sector, SectorImpact> {
    let mut breakdown = BTreeMap::new();

    for sector in Sector::ALL {
        let share = if sector == primary {
            0.5 + rng.gen_range(-0.1..=0.1)
        } else {
            interconnectedness(primary, sector) * 0.1 + rng.gen_range(0.0..=0.05)
        };

        breakdown.insert(
            sector,
            SectorImpact {
                gdp_impact: round2(gdp_impact * share),
                employment_impact: round2(-unemployment_impact * share),
                impact_percentage: round1(share * 100.0),
            },
        );
    }

    breakdown
}
