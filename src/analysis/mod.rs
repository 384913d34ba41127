//! Per-cell statistics over a pixel source

/// Cell views, geometry and colour statistics
pub mod cell;
/// Quantization, luma and Shannon entropy helpers
pub mod entropy;

pub use cell::{AverageColor, Cell, Rectangle};
