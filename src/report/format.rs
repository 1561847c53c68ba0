//! Terminal formatting for predictions, diagnostics, and history.

use crate::data::history::HistoricalPolicy;
use crate::domain::{PolicyInput, PredictionResult};
use crate::fit::TrainedModel;

/// Threshold-based reading of a GDP impact (percent).
pub fn gdp_interpretation(value: f64) -> &'static str {
    if value > 1.0 {
        "Strong positive impact"
    } else if value > 0.0 {
        "Positive impact"
    } else if value > -1.0 {
        "Minimal impact"
    } else {
        "Negative impact"
    }
}

/// Threshold-based reading of an inflation impact (percentage points).
pub fn inflation_interpretation(value: f64) -> &'static str {
    if value > 0.5 {
        "Inflationary pressure"
    } else if value > -0.5 {
        "Stable inflation"
    } else {
        "Deflationary pressure"
    }
}

/// Threshold-based reading of an unemployment impact (percentage points).
pub fn unemployment_interpretation(value: f64) -> &'static str {
    if value > 0.5 {
        "Job losses expected"
    } else if value > -0.5 {
        "Stable employment"
    } else {
        "Job creation expected"
    }
}

/// Threshold-based reading of an environmental impact (percent; negative is
/// an improvement).
pub fn environment_interpretation(value: f64) -> &'static str {
    if value > 2.0 {
        "Environmental concern"
    } else if value > -2.0 {
        "Neutral impact"
    } else {
        "Environmental benefit"
    }
}

/// Format the headline prediction summary.
pub fn format_prediction_summary(input: &PolicyInput, result: &PredictionResult) -> String {
    let mut out = String::new();

    out.push_str("=== impact - Policy Impact Estimate ===\n");
    out.push_str(&format!(
        "Scenario: {} | {} | change {:+.1}% | horizon {} months\n",
        input.sector.display_name(),
        input.region.display_name(),
        input.numeric_change,
        input.time_period_months,
    ));
    out.push_str(&format!(
        "Confidence: {:.2} | Sentiment: {:+.2} (confidence {:.2})\n",
        result.confidence_score, result.sentiment_score, result.sentiment_confidence,
    ));

    out.push_str("\nEstimated impacts:\n");
    out.push_str(&format!(
        "- GDP          {:>8} {:<24}\n",
        format!("{:+.2}%", result.gdp_impact),
        gdp_interpretation(result.gdp_impact),
    ));
    out.push_str(&format!(
        "- Inflation    {:>8} {:<24}\n",
        format!("{:+.2}pp", result.inflation_impact),
        inflation_interpretation(result.inflation_impact),
    ));
    out.push_str(&format!(
        "- Unemployment {:>8} {:<24}\n",
        format!("{:+.2}pp", result.unemployment_impact),
        unemployment_interpretation(result.unemployment_impact),
    ));
    out.push_str(&format!(
        "- Environment  {:>8} {:<24}\n",
        format!("{:+.2}%", result.environmental_impact),
        environment_interpretation(result.environmental_impact),
    ));

    out
}

/// Format the per-sector breakdown table.
pub fn format_breakdown_table(result: &PredictionResult) -> String {
    let mut out = String::new();

    out.push_str("Sector breakdown (shares are independent draws, not a partition):\n");
    out.push_str(&format!(
        "{:<16} {:>10} {:>12} {:>8}\n",
        "sector", "gdp", "employment", "share"
    ));
    out.push_str(&format!("{:-<16} {:-<10} {:-<12} {:-<8}\n", "", "", "", ""));

    for (sector, slice) in &result.sector_breakdown {
        out.push_str(&format!(
            "{:<16} {:>10} {:>12} {:>7.1}%\n",
            sector.display_name(),
            format!("{:+.2}", slice.gdp_impact),
            format!("{:+.2}", slice.employment_impact),
            slice.impact_percentage,
        ));
    }

    out
}

/// Format per-target fit diagnostics and corpus stats.
pub fn format_fit_diagnostics(model: &TrainedModel) -> String {
    let mut out = String::new();
    let stats = model.stats();

    out.push_str("=== impact - Model Diagnostics ===\n");
    out.push_str(&format!(
        "Corpus: n={} | change=[{:.1}, {:.1}]% | horizon=[{:.0}, {:.0}] months\n",
        stats.n_samples, stats.change_min, stats.change_max, stats.period_min, stats.period_max,
    ));

    out.push_str("\nPer-target fit quality:\n");
    for est in model.estimators() {
        out.push_str(&format!(
            "- {:<12} basis={:<11} p={:<3} SSE={:<10.3} RMSE={:.3}\n",
            est.indicator.display_name(),
            est.kind.display_name(),
            est.betas.len(),
            est.quality.sse,
            est.quality.rmse,
        ));
    }

    out
}

/// Format a table of historical reference policies.
pub fn format_history_table(title: &str, policies: &[&HistoricalPolicy]) -> String {
    let mut out = String::new();

    if policies.is_empty() {
        out.push_str(&format!("No historical reference policies ({title}).\n"));
        return out;
    }

    out.push_str(&format!("Historical reference policies ({title}):\n"));
    out.push_str(&format!(
        "{:<44} {:<12} {:>5} {:>7} {:>7} {:>7} {:>7}\n",
        "policy", "country", "year", "gdp", "infl", "unemp", "env"
    ));
    out.push_str(&format!(
        "{:-<44} {:-<12} {:-<5} {:-<7} {:-<7} {:-<7} {:-<7}\n",
        "", "", "", "", "", "", ""
    ));

    for p in policies {
        out.push_str(&format!(
            "{:<44} {:<12} {:>5} {:>7} {:>7} {:>7} {:>7}\n",
            truncate(p.name, 44),
            truncate(p.country, 12),
            p.year_implemented,
            format!("{:+.1}", p.actual_gdp_impact),
            format!("{:+.1}", p.actual_inflation_impact),
            format!("{:+.1}", p.actual_unemployment_impact),
            format!("{:+.1}", p.actual_environmental_impact),
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
