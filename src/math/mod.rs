//! Mathematical utilities: the least-squares solver behind every estimator.

pub mod ols;

pub use ols::*;
