//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging and `.env` configuration
//! - parses CLI arguments
//! - trains the model and runs estimation via the shared pipeline
//! - prints reports and writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, HistoryArgs, PredictArgs, TrainArgs};
use crate::data::history::{HISTORICAL_POLICIES, HistoricalPolicy, comparables};
use crate::domain::{EngineConfig, PolicyInput};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `impact` binary.
pub fn run() -> Result<(), AppError> {
    // Logging goes to stderr so report output on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Predict(args) => handle_predict(args),
        Command::Fit(args) => handle_fit(args),
        Command::History(args) => handle_history(args),
    }
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = engine_config_from_args(&args.train)?;
    let input = PolicyInput::validated(args.sector, args.region, args.change, args.months)?;

    let run = pipeline::run_predict(&config, &input, args.noise_seed, args.top)?;

    println!("{}", crate::report::format_prediction_summary(&input, &run.result));
    println!("{}", crate::report::format_breakdown_table(&run.result));
    println!(
        "{}",
        crate::report::format_history_table(input.sector.display_name(), &run.comparables)
    );

    if let Some(path) = &args.export {
        crate::io::write_prediction_json(path, &input, &run.result, &run.model)?;
    }
    if let Some(path) = &args.export_breakdown {
        crate::io::write_breakdown_csv(path, &run.result)?;
    }

    Ok(())
}

fn handle_fit(args: TrainArgs) -> Result<(), AppError> {
    let config = engine_config_from_args(&args)?;
    let model = pipeline::run_fit(&config)?;
    println!("{}", crate::report::format_fit_diagnostics(&model));
    Ok(())
}

fn handle_history(args: HistoryArgs) -> Result<(), AppError> {
    match args.sector {
        Some(sector) => {
            let policies = comparables(sector, HISTORICAL_POLICIES.len());
            println!(
                "{}",
                crate::report::format_history_table(sector.display_name(), &policies)
            );
        }
        None => {
            let mut policies: Vec<&'static HistoricalPolicy> =
                HISTORICAL_POLICIES.iter().collect();
            policies.sort_by(|a, b| b.year_implemented.cmp(&a.year_implemented));
            println!("{}", crate::report::format_history_table("all", &policies));
        }
    }
    Ok(())
}

/// Resolve the engine configuration: CLI flags take precedence over the
/// environment (`IMPACT_SAMPLES`, `IMPACT_SEED`), which takes precedence
/// over defaults.
pub fn engine_config_from_args(args: &TrainArgs) -> Result<EngineConfig, AppError> {
    let sample_count = match args.samples {
        Some(n) => n,
        None => env_parse::<usize>("IMPACT_SAMPLES")?.unwrap_or(1000),
    };
    let seed = match args.seed {
        Some(s) => Some(s),
        None => env_parse::<u64>("IMPACT_SEED")?,
    };

    Ok(EngineConfig { sample_count, seed })
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::usage(format!("Invalid {name} value: '{raw}'."))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_environment_defaults() {
        let args = TrainArgs {
            samples: Some(250),
            seed: Some(9),
        };
        let config = engine_config_from_args(&args).unwrap();
        assert_eq!(config.sample_count, 250);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let args = TrainArgs {
            samples: None,
            seed: None,
        };
        // Scope: assumes IMPACT_SAMPLES/IMPACT_SEED are unset in the test env.
        if std::env::var("IMPACT_SAMPLES").is_err() && std::env::var("IMPACT_SEED").is_err() {
            let config = engine_config_from_args(&args).unwrap();
            assert_eq!(config.sample_count, 1000);
            assert_eq!(config.seed, None);
        }
    }
}
