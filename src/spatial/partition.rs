//! Grid partitioning of a pixel source into cells
//!
//! Cells are produced in row-major order (`y` outer, `x` inner). The last
//! cell of each row and column is clamped to the remaining extent, so the
//! grid covers every pixel without reading past the edge.

use log::debug;

use crate::analysis::cell::Cell;
use crate::io::configuration::DEFAULT_GRID_DIVISIONS;
use crate::io::error::{Result, invalid_argument};
use crate::pixel::source::PixelSource;

/// Requested cell dimensions; `None` falls back to a fifth of the image axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSize {
    /// Requested cell width in pixels
    pub width: Option<u32>,
    /// Requested cell height in pixels
    pub height: Option<u32>,
}

impl CellSize {
    /// Explicit width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Derive both dimensions from the image (roughly a 5x5 grid)
    pub const fn auto() -> Self {
        Self {
            width: None,
            height: None,
        }
    }

    /// Reject explicit zero dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an explicit width or height is zero
    pub fn validate(self) -> Result<Self> {
        if self.width == Some(0) {
            return Err(invalid_argument(
                "cell_width",
                &0,
                &"cell width must be greater than zero",
            ));
        }
        if self.height == Some(0) {
            return Err(invalid_argument(
                "cell_height",
                &0,
                &"cell height must be greater than zero",
            ));
        }
        Ok(self)
    }

    /// Concrete `(cell_width, cell_height)` for an image of the given size
    ///
    /// Omitted dimensions become `floor(axis / 5)`, raised to 1 so images
    /// narrower than five pixels still partition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an explicit width or height is zero
    pub fn resolve(self, image_width: u32, image_height: u32) -> Result<(u32, u32)> {
        let size = self.validate()?;
        let default_for = |extent: u32| (extent / DEFAULT_GRID_DIVISIONS).max(1);
        Ok((
            size.width.unwrap_or_else(|| default_for(image_width)),
            size.height.unwrap_or_else(|| default_for(image_height)),
        ))
    }
}

/// Partition `source` into cells, keeping only those with content
///
/// A source with zero width or height yields no cells. Requested sizes
/// larger than the image produce a single cell covering it.
///
/// # Errors
///
/// Returns `InvalidArgument` for zero cell dimensions, and propagates read
/// failures from the content check
pub fn partition_cells<S: PixelSource + ?Sized>(
    source: &S,
    size: CellSize,
) -> Result<Vec<Cell<'_, S>>> {
    let size = size.validate()?;
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        debug!("partition_cells: empty {width}x{height} source, no cells");
        return Ok(Vec::new());
    }

    let (cell_width, cell_height) = size.resolve(width, height)?;

    let mut cells = Vec::new();
    let mut discarded = 0usize;
    for y in (0..height).step_by(cell_height as usize) {
        for x in (0..width).step_by(cell_width as usize) {
            let cell = Cell::new(
                x,
                y,
                cell_width.min(width - x),
                cell_height.min(height - y),
                source,
            );
            if cell.has_pixels()? {
                cells.push(cell);
            } else {
                discarded += 1;
            }
        }
    }

    debug!(
        "partition_cells: {width}x{height} into {cell_width}x{cell_height} cells, kept {}, discarded {discarded}",
        cells.len()
    );

    Ok(cells)
}
