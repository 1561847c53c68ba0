//! Estimator bases for the four target indicators.
//!
//! The fitter relies on two primitive operations:
//! - build a design row for a feature vector (for the least-squares fit)
//! - predict the target for a feature vector given fitted coefficients
//!
//! Both are implemented here per estimator kind.

pub mod model;

pub use model::*;
