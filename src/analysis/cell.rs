//! Rectangular views into a pixel source and their statistics
//!
//! A cell borrows its source and never caches anything: each statistic
//! re-reads the region, so results always reflect the source's current
//! pixels.

use std::fmt;

use crate::analysis::entropy::{bucket, entropy_of, luminance, validate_sensitivity};
use crate::io::configuration::RED;
use crate::io::error::{CellError, Result};
use crate::pixel::source::{ChannelValues, ImageSnapshot, PixelSource};

/// Axis-aligned bounds of a cell; maxima are exclusive (`origin + extent`)
///
/// Maxima are `u64` so a cell at the far edge of the `u32` range still has
/// a representable end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Left edge (inclusive)
    pub x_min: u32,
    /// Right edge (exclusive)
    pub x_max: u64,
    /// Top edge (inclusive)
    pub y_min: u32,
    /// Bottom edge (exclusive)
    pub y_max: u64,
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

/// Per-channel mean colour, each component rounded half away from zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AverageColor {
    /// Mean red
    pub r: u8,
    /// Mean green
    pub g: u8,
    /// Mean blue
    pub b: u8,
}

impl fmt::Display for AverageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fixed rectangle over a borrowed pixel source
///
/// Geometry never changes after construction. The source must outlive the
/// cell, which the borrow enforces.
pub struct Cell<'a, S: PixelSource + ?Sized> {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    source: &'a S,
}

impl<S: PixelSource + ?Sized> Clone for Cell<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: PixelSource + ?Sized> Copy for Cell<'_, S> {}

impl<S: PixelSource + ?Sized> fmt::Debug for Cell<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<'a, S: PixelSource + ?Sized> Cell<'a, S> {
    /// Create a cell with origin `(x, y)` and the given extent
    ///
    /// The rectangle is not checked against the source here; reads past the
    /// source edge fail with `OutOfBounds` when a statistic is requested.
    pub const fn new(x: u32, y: u32, width: u32, height: u32, source: &'a S) -> Self {
        Self {
            x,
            y,
            width,
            height,
            source,
        }
    }

    /// Origin column
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Origin row
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Horizontal extent
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Vertical extent
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The source this cell reads from
    pub const fn source(&self) -> &'a S {
        self.source
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether this and `other` are the same view of the same source
    pub fn same_view(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.source, other.source) && self.rectangle() == other.rectangle()
    }

    /// Bounds derived from the stored geometry
    pub const fn rectangle(&self) -> Rectangle {
        Rectangle {
            x_min: self.x,
            x_max: self.x as u64 + self.width as u64,
            y_min: self.y,
            y_max: self.y as u64 + self.height as u64,
            width: self.width,
            height: self.height,
        }
    }

    /// Row and column of this cell in a grid of `cell_width` x `cell_height` cells
    ///
    /// Zero cell sizes map to index 0 on that axis.
    pub fn grid_position(&self, cell_width: u32, cell_height: u32) -> (u32, u32) {
        (
            self.y.checked_div(cell_height).unwrap_or(0),
            self.x.checked_div(cell_width).unwrap_or(0),
        )
    }

    /// Whether the cell holds at least one readable pixel
    ///
    /// A red read never comes back empty (absent channels read as 255), so
    /// the first pixel in row-major order settles the answer.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the cell reaches outside its source
    pub fn has_pixels(&self) -> Result<bool> {
        match self.coordinates().next() {
            Some((x, y)) => {
                self.source.channel_value(x, y, RED)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Mean red, green and blue over the cell
    ///
    /// # Errors
    ///
    /// Returns `EmptyRegion` for a zero-area cell and `OutOfBounds` when the
    /// cell reaches outside its source
    pub fn average_color(&self) -> Result<AverageColor> {
        let pixels = self.non_empty_pixels()?;

        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for pixel in &pixels {
            r += u64::from(pixel.red());
            g += u64::from(pixel.green());
            b += u64::from(pixel.blue());
        }

        let count = pixels.len() as f64;
        let mean = |sum: u64| (sum as f64 / count).round() as u8;
        Ok(AverageColor {
            r: mean(r),
            g: mean(g),
            b: mean(b),
        })
    }

    /// Minimum and maximum of one channel over the cell
    ///
    /// # Errors
    ///
    /// Returns `EmptyRegion` for a zero-area cell and `OutOfBounds` when the
    /// cell reaches outside its source
    pub fn channel_range(&self, channel: &str) -> Result<(u8, u8)> {
        let pixels = self.non_empty_pixels()?;
        let values = pixels.iter().map(|pixel| pixel.value(channel));

        let min = values.clone().min().unwrap_or_default();
        let max = values.max().unwrap_or_default();
        Ok((min, max))
    }

    /// Shannon entropy (bits) of the quantized RGB colours in the cell
    ///
    /// Each channel is bucketed independently by `round(v / s) * s`, so a
    /// larger sensitivity gives coarser buckets. Zero-area cells have
    /// entropy 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a non-positive sensitivity and
    /// `OutOfBounds` when the cell reaches outside its source
    pub fn entropy_with_color(&self, color_sensitivity: f64) -> Result<f64> {
        let sensitivity = validate_sensitivity(color_sensitivity)?;
        let pixels = self.pixels()?;

        Ok(entropy_of(pixels.iter().map(|pixel| {
            (
                bucket(f64::from(pixel.red()), sensitivity),
                bucket(f64::from(pixel.green()), sensitivity),
                bucket(f64::from(pixel.blue()), sensitivity),
            )
        })))
    }

    /// Shannon entropy (bits) of the quantized BT.601 luma in the cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a non-positive sensitivity and
    /// `OutOfBounds` when the cell reaches outside its source
    pub fn entropy_greyscale(&self, color_sensitivity: f64) -> Result<f64> {
        let sensitivity = validate_sensitivity(color_sensitivity)?;
        let pixels = self.pixels()?;

        Ok(entropy_of(pixels.iter().map(|pixel| {
            bucket(
                luminance(pixel.red(), pixel.green(), pixel.blue()),
                sensitivity,
            )
        })))
    }

    /// Channel values at image-absolute coordinates
    ///
    /// `x` and `y` are NOT relative to the cell origin; add [`Cell::x`] and
    /// [`Cell::y`] yourself for cell-local access.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the coordinates lie outside the source
    pub fn rgb_values_for_coordinates(&self, x: i64, y: i64) -> Result<ChannelValues> {
        self.source.channel_values(x, y)
    }

    /// Copy the cell out as a standalone image snapshot
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the cell reaches outside its source
    pub fn image_data(&self) -> Result<ImageSnapshot> {
        Ok(ImageSnapshot::new(
            self.width,
            self.height,
            self.source.channels(),
            self.pixels()?,
        ))
    }

    /// Pixels of the cell in row-major order
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when the cell reaches outside its source
    pub fn pixels(&self) -> Result<Vec<ChannelValues>> {
        let rect = self.rectangle();
        self.source.channel_values_for_region(
            i64::from(rect.x_min),
            rect.x_max as i64,
            i64::from(rect.y_min),
            rect.y_max as i64,
        )
    }

    fn non_empty_pixels(&self) -> Result<Vec<ChannelValues>> {
        if self.area() == 0 {
            return Err(CellError::EmptyRegion {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels()
    }

    fn coordinates(&self) -> impl Iterator<Item = (i64, i64)> {
        let rect = self.rectangle();
        // Maxima are at most 2 * u32::MAX and always fit in i64
        let columns = i64::from(rect.x_min)..rect.x_max as i64;
        (i64::from(rect.y_min)..rect.y_max as i64)
            .flat_map(move |y| columns.clone().map(move |x| (x, y)))
    }
}
