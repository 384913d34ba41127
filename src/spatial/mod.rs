//! Spatial partitioning and cell bookkeeping
//!
//! This module contains:
//! - Grid partitioning of a source into clamped, content-filtered cells
//! - A session-scoped registry for lookup and removal

/// Grid partitioning into cells
pub mod partition;
/// Session-scoped cell collection
pub mod registry;

pub use partition::{CellSize, partition_cells};
pub use registry::{CellId, CellRegistry, RegisteredCell};
