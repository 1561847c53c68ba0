//! Multi-target model fitting.
//!
//! Responsibilities:
//!
//! - build the design matrix for each target's estimator basis
//! - solve the four independent least-squares fits (parallel)
//! - assemble the immutable `TrainedModel` with per-target diagnostics

pub mod fitter;

pub use fitter::*;
