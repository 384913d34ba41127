//! Grid partitioning and per-cell colour statistics for raster images
//!
//! An image is loaded into a [`pixel::PixelSource`], cut into a grid of
//! [`analysis::Cell`]s and each cell is queried on demand for its average
//! colour and the Shannon entropy of its quantized colours or luma.

#![forbid(unsafe_code)]

/// Per-cell statistics: average colour, channel ranges and entropy
pub mod analysis;
/// Input/output adapters, configuration, reporting and error handling
pub mod io;
/// Pixel access abstraction and its storage backends
pub mod pixel;
/// Grid partitioning and the session-scoped cell registry
pub mod spatial;

pub use io::error::{CellError, Result};
