//! Command-line parsing for the policy impact estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Region, Sector};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "impact", version, about = "Policy Impact Estimation Engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train a model and estimate the impact of one policy scenario.
    Predict(PredictArgs),
    /// Train a model and print per-target fit diagnostics only.
    Fit(TrainArgs),
    /// List historical reference policies.
    History(HistoryArgs),
}

/// Options shared by every command that trains a model.
#[derive(Debug, Parser, Clone, Copy)]
pub struct TrainArgs {
    /// Number of synthetic training samples (default 1000, or IMPACT_SAMPLES).
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Corpus seed for reproducible fits (default entropy, or IMPACT_SEED).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options for estimating one policy scenario.
#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub train: TrainArgs,

    /// Sector the policy targets.
    #[arg(short, long, value_enum)]
    pub sector: Sector,

    /// Region the policy applies to.
    #[arg(short, long, value_enum)]
    pub region: Region,

    /// Signed policy magnitude in percent (-100 to 100).
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    pub change: f64,

    /// Policy horizon in months (1 to 120).
    #[arg(short = 'm', long)]
    pub months: u32,

    /// Noise seed for sentiment/breakdown (reproducible output).
    #[arg(long)]
    pub noise_seed: Option<u64>,

    /// Show up to N historical comparables for the sector.
    #[arg(long, default_value_t = 3)]
    pub top: usize,

    /// Export the full result (scenario + result + fit quality) to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the sector breakdown to CSV.
    #[arg(long = "export-breakdown")]
    pub export_breakdown: Option<PathBuf>,
}

/// Options for listing the historical catalogue.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Only show policies for this sector.
    #[arg(short, long, value_enum)]
    pub sector: Option<Sector>,
}
