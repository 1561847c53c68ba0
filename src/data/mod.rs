//! Static economic data and synthetic corpus generation.
//!
//! - sector/region coefficient tables (`profiles`)
//! - labeled training-sample synthesis (`synth`)
//! - historical reference policies for report comparisons (`history`)

pub mod history;
pub mod profiles;
pub mod synth;

pub use history::*;
pub use profiles::*;
pub use synth::*;
