//! Board-agnostic core for the parallel TFT driver
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Pixel format (RGB 5-6-5)
//! - Address windows, panel geometry and clipping arithmetic
//! - Controller identifiers and the ID to controller table
//! - Bus timing configuration
//! - Text cursor state for the graphics layer
//! - Error types and the upward graphics trait

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;
pub mod text;
pub mod traits;

pub use color::Rgb565;
pub use config::{BusTiming, DriverConfig};
pub use error::DriverError;
pub use geometry::{AddressWindow, Geometry};
pub use id::{ControllerId, ControllerKind};
pub use tftlcd_hal::BusDirection;
pub use text::TextState;
pub use traits::{GraphicsTarget, GraphicsTargetExt};
