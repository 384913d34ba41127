//! Per-cell statistics rows and their text rendering

use std::fmt;

use crate::analysis::cell::{AverageColor, Cell, Rectangle};
use crate::io::error::Result;
use crate::pixel::source::PixelSource;

/// Statistics of one cell, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct CellReport {
    /// Grid row of the cell
    pub row: u32,
    /// Grid column of the cell
    pub col: u32,
    /// Cell bounds in image coordinates
    pub rectangle: Rectangle,
    /// Mean RGB colour
    pub average: AverageColor,
    /// Colour entropy in bits
    pub color_entropy: f64,
    /// Greyscale entropy in bits
    pub greyscale_entropy: f64,
}

impl CellReport {
    /// Compute every statistic of `cell`
    ///
    /// `cell_size` is the resolved partition size used to derive the grid
    /// position; `sensitivity` is the entropy quantization step.
    ///
    /// # Errors
    ///
    /// Propagates `EmptyRegion`, `OutOfBounds` and `InvalidArgument` from the
    /// cell statistics
    pub fn from_cell<S: PixelSource + ?Sized>(
        cell: &Cell<'_, S>,
        cell_size: (u32, u32),
        sensitivity: f64,
    ) -> Result<Self> {
        let (row, col) = cell.grid_position(cell_size.0, cell_size.1);
        Ok(Self {
            row,
            col,
            rectangle: cell.rectangle(),
            average: cell.average_color()?,
            color_entropy: cell.entropy_with_color(sensitivity)?,
            greyscale_entropy: cell.entropy_greyscale(sensitivity)?,
        })
    }

    /// Column header matching the [`fmt::Display`] layout
    pub const fn header() -> &'static str {
        "row col  x      y      w     h     average  color_H  grey_H"
    }
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:>3}  {:<6} {:<6} {:<5} {:<5} {}  {:>7.4}  {:>6.4}",
            self.row,
            self.col,
            self.rectangle.x_min,
            self.rectangle.y_min,
            self.rectangle.width,
            self.rectangle.height,
            self.average,
            self.color_entropy,
            self.greyscale_entropy
        )
    }
}

/// Render reports as a text table with a header line
pub fn format_table(reports: &[CellReport]) -> String {
    let mut table = String::from(CellReport::header());
    for report in reports {
        table.push('\n');
        table.push_str(&report.to_string());
    }
    table
}
