//! Backend over a decoded `image` RGBA buffer

use image::{DynamicImage, Rgba, RgbaImage};

use crate::io::configuration::RGBA_CHANNELS;
use crate::io::error::{CellError, Result, invalid_argument};
use crate::pixel::source::{ChannelValues, ImageSnapshot, PixelSource, check_pixel};

/// Pixel source reading straight from an 8-bit RGBA image buffer
///
/// The channel layout is fixed to `r`, `g`, `b`, `a`.
#[derive(Debug, Clone)]
pub struct RgbaBufferStore {
    image: RgbaImage,
    channels: Vec<String>,
}

impl RgbaBufferStore {
    /// Wrap an RGBA buffer
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            channels: RGBA_CHANNELS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Convert any decoded image to 8-bit RGBA and wrap it
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::new(image.to_rgba8())
    }

    /// Build a buffer from a construction snapshot
    ///
    /// Channels a pixel entry lacks are written as 255.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` when the pixel count doesn't match the dimensions
    pub fn from_snapshot(snapshot: &ImageSnapshot) -> Result<Self> {
        snapshot.validate()?;

        let mut image = RgbaImage::new(snapshot.width, snapshot.height);
        for (pixel, values) in image.pixels_mut().zip(&snapshot.pixels) {
            *pixel = Rgba([values.red(), values.green(), values.blue(), values.alpha()]);
        }
        Ok(Self::new(image))
    }

    /// Borrow the underlying buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Release the underlying buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn pixel_at(&self, x: i64, y: i64) -> Result<&Rgba<u8>> {
        check_pixel(self.image.width(), self.image.height(), x, y)?;
        // check_pixel bounds both coordinates by u32 dimensions
        self.image
            .get_pixel_checked(x as u32, y as u32)
            .ok_or(CellError::OutOfBounds {
                x,
                y,
                width: self.image.width(),
                height: self.image.height(),
            })
    }
}

impl PixelSource for RgbaBufferStore {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn channels(&self) -> &[String] {
        &self.channels
    }

    fn channel_values(&self, x: i64, y: i64) -> Result<ChannelValues> {
        let Rgba(rgba) = *self.pixel_at(x, y)?;
        Ok(RGBA_CHANNELS.into_iter().zip(rgba).collect())
    }

    fn set_channel_values_for_pixel(
        &mut self,
        x: i64,
        y: i64,
        values: &ChannelValues,
    ) -> Result<&mut Self> {
        check_pixel(self.image.width(), self.image.height(), x, y)?;

        let mut slots = [None; 4];
        for (channel, value) in values.iter() {
            let slot = RGBA_CHANNELS
                .iter()
                .position(|&name| name == channel)
                .and_then(|index| slots.get_mut(index))
                .ok_or_else(|| {
                    invalid_argument(
                        "channel",
                        &channel,
                        &"RGBA buffers only store r, g, b and a",
                    )
                })?;
            *slot = Some(value);
        }

        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            for (current, update) in pixel.0.iter_mut().zip(slots) {
                if let Some(value) = update {
                    *current = value;
                }
            }
        }
        Ok(self)
    }
}
