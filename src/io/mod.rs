//! Result exports.
//!
//! - prediction JSON (scenario + result + fit diagnostics) (`export`)
//! - sector-breakdown CSV for spreadsheets and downstream scripts (`export`)

pub mod export;

pub use export::*;
