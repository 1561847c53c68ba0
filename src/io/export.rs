//! Write prediction results to JSON and CSV files.
//!
//! The JSON file is the "portable" representation of one estimation run:
//! the scenario, the full result, and the per-target fit quality of the
//! model that produced it. The CSV carries only the sector breakdown.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FitQuality, Indicator, PolicyInput, PredictionResult};
use crate::error::AppError;
use crate::fit::TrainedModel;
use crate::models::EstimatorKind;

/// Fit quality of one target estimator, as exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetQuality {
    pub indicator: Indicator,
    pub basis: EstimatorKind,
    pub quality: FitQuality,
}

/// Schema of the prediction JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub input: PolicyInput,
    pub result: PredictionResult,
    pub fit_quality: Vec<TargetQuality>,
}

impl PredictionFile {
    pub fn new(input: &PolicyInput, result: &PredictionResult, model: &TrainedModel) -> Self {
        PredictionFile {
            tool: "impact".to_string(),
            generated_at: Utc::now(),
            input: *input,
            result: result.clone(),
            fit_quality: model
                .estimators()
                .iter()
                .map(|est| TargetQuality {
                    indicator: est.indicator,
                    basis: est.kind,
                    quality: est.quality,
                })
                .collect(),
        }
    }
}

/// Write a prediction JSON file.
pub fn write_prediction_json(
    path: &Path,
    input: &PolicyInput,
    result: &PredictionResult,
    model: &TrainedModel,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create prediction JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, &PredictionFile::new(input, result, model))
        .map_err(|e| AppError::internal(format!("Failed to write prediction JSON: {e}")))?;

    Ok(())
}

/// Write the sector breakdown to a CSV file.
pub fn write_breakdown_csv(path: &Path, result: &PredictionResult) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create breakdown CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "sector,gdp_impact,employment_impact,impact_percentage")
        .map_err(|e| AppError::internal(format!("Failed to write breakdown CSV header: {e}")))?;

    for (sector, slice) in &result.sector_breakdown {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.1}",
            sector.display_name(),
            slice.gdp_impact,
            slice.employment_impact,
            slice.impact_percentage,
        )
        .map_err(|e| AppError::internal(format!("Failed to write breakdown CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_training_data;
    use crate::domain::{EngineConfig, Region, Sector};
    use crate::engine::predict_with_model;
    use crate::fit::train_model;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture() -> (PolicyInput, PredictionResult, TrainedModel) {
        let samples = generate_training_data(&EngineConfig {
            sample_count: 400,
            seed: Some(21),
        })
        .unwrap();
        let model = train_model(&samples).unwrap();
        let input = PolicyInput {
            sector: Sector::Healthcare,
            region: Region::Europe,
            numeric_change: 15.0,
            time_period_months: 24,
        };
        let result = predict_with_model(&model, &input, &mut StdRng::seed_from_u64(1)).unwrap();
        (input, result, model)
    }

    #[test]
    fn prediction_json_round_trips() {
        let (input, result, model) = fixture();
        let path = std::env::temp_dir().join("impact_export_test.json");

        write_prediction_json(&path, &input, &result, &model).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: PredictionFile = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed.tool, "impact");
        assert_eq!(parsed.input, input);
        assert_eq!(parsed.result, result);
        assert_eq!(parsed.fit_quality.len(), 4);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn breakdown_csv_has_one_row_per_sector() {
        let (_, result, _) = fixture();
        let path = std::env::temp_dir().join("impact_breakdown_test.csv");

        write_breakdown_csv(&path, &result).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + Sector::ALL.len());
        assert!(lines[0].starts_with("sector,"));
        assert!(lines[1..].iter().any(|l| l.starts_with("Energy,")));

        std::fs::remove_file(&path).ok();
    }
}
