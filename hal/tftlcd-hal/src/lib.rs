//! Platform abstraction for 8-bit parallel TFT panels
//!
//! This crate defines the traits a board support layer implements so the
//! panel driver can run on any MCU that exposes an 8-bit GPIO port and
//! four (optionally five) discrete control lines.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tftlcd-drivers (bus protocol, blits)   │
//! └─────────────────────────────────────────┘
//!                     │  ParallelBus
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tftlcd-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  OutputPin x4 │       │   DataPort    │
//! │  (+ reset)    │       │  (8-bit GPIO) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Discrete control line
//! - [`port::DataPort`] - Register-mapped 8-bit data port
//! - [`bus::ParallelBus`] - Everything the protocol layer needs, addressed by [`bus::Line`]

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;
pub mod port;

// Re-export key traits at crate root for convenience
pub use bus::{ControlPins, GpioBus, Line, ParallelBus};
pub use gpio::{NoPin, OutputPin};
pub use port::{BusDirection, DataPort};
