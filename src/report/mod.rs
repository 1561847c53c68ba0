//! Reporting utilities: formatted terminal output and result interpretation.
//!
//! We keep formatting code in one place so:
//! - the modeling code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;
