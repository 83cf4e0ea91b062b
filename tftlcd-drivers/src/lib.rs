//! 8-bit parallel TFT panel driver
//!
//! This crate drives the common family of 8080-style parallel TFT panels
//! over any [`tftlcd_hal::ParallelBus`]:
//!
//! - Bus signalling and strobes ([`bus`])
//! - Command/register framing and register reads
//! - Controller identification ([`detect`])
//! - Per-controller init tables and GRAM addressing ([`controller`])
//! - Fills, pixel streams and bitmaps on [`TftLcd`]
//!
//! ```text
//! TftLcd::new(bus, delay, config)
//!   └── BusContext::read_id()   reset + probe
//!   └── TftLcd::spawn()         id -> ControllerKind
//!   └── TftLcd::begin()         init table + full window
//! ```

#![no_std]
#![deny(unsafe_code)]

// Must come first so the log macros are visible in every module
mod fmt;

mod blit;
pub mod bus;
pub mod controller;
pub mod detect;
pub mod driver;
#[cfg(feature = "graphics")]
mod graphics;
mod protocol;
#[cfg(test)]
mod sim;

pub use bus::BusContext;
pub use controller::{InitStep, PanelController};
pub use detect::{ProbeReading, ProbeReport};
pub use driver::{SpawnError, TftLcd};
