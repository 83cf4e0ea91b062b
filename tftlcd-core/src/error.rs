//! Driver errors
//!
//! Only construction can fail. Off-screen or empty draws are silent
//! no-ops, and the bus itself has no error signalling: a panel that does
//! not answer just reads back garbage, which shows up here as an
//! unsupported ID.

use core::fmt;

use crate::id::ControllerId;

/// Errors reported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Probed ID has no matching controller
    UnsupportedPanel(ControllerId),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPanel(id) => write!(f, "unsupported panel (id {})", id),
        }
    }
}
