//! Domain types used throughout the estimation pipeline.
//!
//! This module defines:
//!
//! - the categorical enumerations (`Sector`, `Region`) and their stable indices
//! - engine inputs (`PolicyInput`, `FeatureVector`, `EngineConfig`)
//! - synthesized training rows (`TrainingSample`, `CorpusStats`)
//! - engine outputs (`PredictionResult`, `SectorImpact`, `FitQuality`)

pub mod types;

pub use types::*;
