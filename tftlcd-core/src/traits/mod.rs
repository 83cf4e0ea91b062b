//! Interface traits
//!
//! These traits define the surface the graphics layer draws through.

pub mod graphics;

pub use graphics::{GraphicsTarget, GraphicsTargetExt};
