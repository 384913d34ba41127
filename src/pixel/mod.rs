//! Pixel access abstraction and its backends
//!
//! This module contains:
//! - The `PixelSource` trait every statistic is written against
//! - A channel-map store matching the construction snapshot one to one
//! - Backends over decoded `image` buffers and dense `ndarray` surfaces

/// Dense `ndarray` surface backend
pub mod array;
/// Decoded RGBA image buffer backend
pub mod buffer;
/// Pixel access trait, channel maps and construction snapshots
pub mod source;
/// Channel-map reference backend
pub mod store;

pub use array::ArrayStore;
pub use buffer::RgbaBufferStore;
pub use source::{ChannelValues, ImageSnapshot, PixelSource};
pub use store::PixelStore;
