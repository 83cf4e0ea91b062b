//! Driver configuration
//!
//! Bus timing lives here rather than in the protocol code so the same
//! driver runs on faster or slower buses without edits.

mod timing;

pub use timing::{BusTiming, DriverConfig};
