//! Backend-independent pixel access
//!
//! Every statistic in [`crate::analysis`] is written once against
//! [`PixelSource`]. Backends only decide how pixels are stored: a channel map
//! per pixel, a decoded `image` buffer, or a dense `ndarray` surface.

use std::collections::BTreeMap;

use crate::io::configuration::{ALPHA, BLUE, GREEN, MISSING_CHANNEL_VALUE, RED};
use crate::io::error::{CellError, Result, invalid_argument, out_of_bounds};

/// Channel name to 8-bit value mapping for one pixel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelValues {
    values: BTreeMap<String, u8>,
}

impl ChannelValues {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a full RGBA mapping
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        [(RED, r), (GREEN, g), (BLUE, b), (ALPHA, a)]
            .into_iter()
            .collect()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, channel: &str, value: u8) -> Self {
        self.insert(channel, value);
        self
    }

    /// Set a channel, returning the previous value if any
    pub fn insert(&mut self, channel: &str, value: u8) -> Option<u8> {
        self.values.insert(channel.to_string(), value)
    }

    /// Stored value of a channel, `None` when the entry doesn't carry it
    pub fn get(&self, channel: &str) -> Option<u8> {
        self.values.get(channel).copied()
    }

    /// Stored value of a channel, reading absent channels as opaque
    pub fn value(&self, channel: &str) -> u8 {
        self.get(channel).unwrap_or(MISSING_CHANNEL_VALUE)
    }

    /// Red component (absent reads as 255)
    pub fn red(&self) -> u8 {
        self.value(RED)
    }

    /// Green component (absent reads as 255)
    pub fn green(&self) -> u8 {
        self.value(GREEN)
    }

    /// Blue component (absent reads as 255)
    pub fn blue(&self) -> u8 {
        self.value(BLUE)
    }

    /// Alpha component (absent reads as 255)
    pub fn alpha(&self) -> u8 {
        self.value(ALPHA)
    }

    /// Overwrite the channels present in `other`, leaving the rest untouched
    pub fn merge(&mut self, other: &Self) {
        for (channel, value) in other.iter() {
            self.insert(channel, value);
        }
    }

    /// Iterate channels in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Number of channels carried
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no channel is carried
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u8)> for ChannelValues {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.as_ref().to_string(), value))
                .collect(),
        }
    }
}

/// Construction-time image shape handed over by the loading collaborator
///
/// `pixels` is row-major (`index = y * width + x`) and must hold exactly
/// `width * height` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSnapshot {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Ordered channel names
    pub channels: Vec<String>,
    /// Row-major pixel entries
    pub pixels: Vec<ChannelValues>,
}

impl ImageSnapshot {
    /// Bundle dimensions, channel names and pixels
    pub fn new<S: AsRef<str>>(
        width: u32,
        height: u32,
        channels: &[S],
        pixels: Vec<ChannelValues>,
    ) -> Self {
        Self {
            width,
            height,
            channels: channels.iter().map(|c| c.as_ref().to_string()).collect(),
            pixels,
        }
    }

    /// Number of pixels the dimensions call for
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that the pixel list matches the declared dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` when the pixel count differs from `width * height`
    pub fn validate(&self) -> Result<()> {
        if self.pixels.len() == self.pixel_count() {
            Ok(())
        } else {
            Err(CellError::InvalidSourceData {
                reason: format!(
                    "expected {} pixels for {}x{}, got {}",
                    self.pixel_count(),
                    self.width,
                    self.height,
                    self.pixels.len()
                ),
            })
        }
    }
}

/// Uniform pixel access over any image backend
///
/// Coordinates are signed so that callers can ask for `-1` and get an
/// `OutOfBounds` error instead of a wrapped index. Reads are side-effect free;
/// writers need exclusive access (`&mut self`).
pub trait PixelSource {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// Ordered channel names every read reports
    fn channels(&self) -> &[String];

    /// Channel values of one pixel
    ///
    /// Every channel of [`PixelSource::channels`] is present in the result;
    /// channels the pixel entry lacks read as 255.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `x` or `y` lies outside the image
    fn channel_values(&self, x: i64, y: i64) -> Result<ChannelValues>;

    /// Merge `values` into the pixel at `(x, y)`
    ///
    /// Channels absent from `values` keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for coordinates outside the image, or
    /// `InvalidArgument` when a channel is not one of [`PixelSource::channels`].
    /// A rejected write leaves the pixel untouched.
    fn set_channel_values_for_pixel(
        &mut self,
        x: i64,
        y: i64,
        values: &ChannelValues,
    ) -> Result<&mut Self>
    where
        Self: Sized;

    /// Value of a single channel at `(x, y)`, absent channels read as 255
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `x` or `y` lies outside the image
    fn channel_value(&self, x: i64, y: i64, channel: &str) -> Result<u8> {
        Ok(self.channel_values(x, y)?.value(channel))
    }

    /// Channel values of a rectangle, row-major (`y` outer, `x` inner)
    ///
    /// End coordinates are exclusive. An empty rectangle inside the image
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when any part of the rectangle lies outside the
    /// image (no clamped partial result), or `InvalidArgument` when a start
    /// lies past its end
    fn channel_values_for_region(
        &self,
        x_start: i64,
        x_end: i64,
        y_start: i64,
        y_end: i64,
    ) -> Result<Vec<ChannelValues>> {
        check_region(self.width(), self.height(), x_start, x_end, y_start, y_end)?;

        let capacity =
            usize::try_from((x_end - x_start).saturating_mul(y_end - y_start)).unwrap_or(0);
        let mut pixels = Vec::with_capacity(capacity);
        for y in y_start..y_end {
            for x in x_start..x_end {
                pixels.push(self.channel_values(x, y)?);
            }
        }
        Ok(pixels)
    }

    /// Copy the whole image out as a construction snapshot
    ///
    /// # Errors
    ///
    /// Propagates read failures of the backend
    fn snapshot(&self) -> Result<ImageSnapshot> {
        let pixels = self.channel_values_for_region(
            0,
            i64::from(self.width()),
            0,
            i64::from(self.height()),
        )?;
        Ok(ImageSnapshot::new(
            self.width(),
            self.height(),
            self.channels(),
            pixels,
        ))
    }
}

/// Validate a single-pixel coordinate and return its row-major index
///
/// # Errors
///
/// Returns `OutOfBounds` when `x` or `y` lies outside `width` x `height`
pub fn check_pixel(width: u32, height: u32, x: i64, y: i64) -> Result<usize> {
    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return Err(out_of_bounds(x, y, width, height));
    }
    // Both coordinates are non-negative and below u32 bounds here
    Ok(y as usize * width as usize + x as usize)
}

/// Validate a half-open rectangle against `width` x `height`
///
/// # Errors
///
/// Returns `InvalidArgument` when a start lies past its end and
/// `OutOfBounds` when the rectangle leaves the image
pub fn check_region(
    width: u32,
    height: u32,
    x_start: i64,
    x_end: i64,
    y_start: i64,
    y_end: i64,
) -> Result<()> {
    if x_start > x_end {
        return Err(invalid_argument(
            "x_end",
            &x_end,
            &format!("must not precede x_start {x_start}"),
        ));
    }
    if y_start > y_end {
        return Err(invalid_argument(
            "y_end",
            &y_end,
            &format!("must not precede y_start {y_start}"),
        ));
    }
    if x_start < 0 || y_start < 0 {
        return Err(out_of_bounds(x_start, y_start, width, height));
    }
    if x_end > i64::from(width) || y_end > i64::from(height) {
        return Err(out_of_bounds(x_end - 1, y_end - 1, width, height));
    }
    Ok(())
}
