//! `policy-impact` library crate.
//!
//! The binary (`impact`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the engine is reusable by other front-ends (e.g., a service layer)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
