//! Bus timing constants

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Delays applied by the bus protocol
///
/// Defaults match what slow 8-bit panels need on a 72 MHz Cortex-M3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusTiming {
    /// Extra hold time for each write strobe in ns (0 = none)
    pub strobe_ns: u32,
    /// Read strobe setup and hold time in µs
    pub read_strobe_us: u32,
    /// Bus turnaround before reading a 16-bit register, in µs
    pub read16_settle_us: u32,
    /// Bus turnaround before reading a 32-bit register, in µs
    pub read32_settle_us: u32,
    /// Length of each phase of the hardware reset pulse, in ms
    pub reset_pulse_ms: u32,
    /// Time the HX8357D needs to apply SETC before it answers, in ms
    pub extended_command_settle_ms: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self {
            strobe_ns: 0,
            read_strobe_us: 10,
            read16_settle_us: 10,
            read32_settle_us: 50,
            reset_pulse_ms: 100,
            extended_command_settle_ms: 300,
        }
    }
}

impl BusTiming {
    /// Timing with every delay removed, for simulated buses
    pub const fn zero() -> Self {
        Self {
            strobe_ns: 0,
            read_strobe_us: 0,
            read16_settle_us: 0,
            read32_settle_us: 0,
            reset_pulse_ms: 0,
            extended_command_settle_ms: 0,
        }
    }
}

/// Driver-level options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Bus timing
    pub timing: BusTiming,
    /// Run the controller init sequence right after detection
    pub init_on_detect: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            timing: BusTiming::default(),
            init_on_detect: true,
        }
    }
}
