//! Reference backend keeping one channel map per pixel

use log::debug;

use crate::io::error::{Result, invalid_argument, out_of_bounds};
use crate::pixel::source::{ChannelValues, ImageSnapshot, PixelSource, check_pixel};

/// In-memory pixel store with a channel map per pixel
///
/// Width, height and the channel list are fixed at construction. Pixel
/// entries may carry any subset of the channels; the rest read as 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelStore {
    width: u32,
    height: u32,
    channels: Vec<String>,
    pixels: Vec<ChannelValues>,
}

impl PixelStore {
    /// Create a store whose pixels carry no channel values yet
    ///
    /// Every read of a fresh store reports 255 for each channel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the channel list is empty
    pub fn new<S: AsRef<str>>(width: u32, height: u32, channels: &[S]) -> Result<Self> {
        Self::from_snapshot(ImageSnapshot::new(
            width,
            height,
            channels,
            vec![ChannelValues::new(); width as usize * height as usize],
        ))
    }

    /// Take ownership of a construction snapshot
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` when the pixel count doesn't match the
    /// dimensions, or `InvalidArgument` when no channel is declared
    pub fn from_snapshot(snapshot: ImageSnapshot) -> Result<Self> {
        snapshot.validate()?;
        if snapshot.channels.is_empty() {
            return Err(invalid_argument(
                "channels",
                &"[]",
                &"at least one channel name is required",
            ));
        }

        debug!(
            "PixelStore: {}x{} with channels {:?}",
            snapshot.width, snapshot.height, snapshot.channels
        );

        Ok(Self {
            width: snapshot.width,
            height: snapshot.height,
            channels: snapshot.channels,
            pixels: snapshot.pixels,
        })
    }

    /// Give the pixel data back as a snapshot without copying
    pub fn into_snapshot(self) -> ImageSnapshot {
        ImageSnapshot {
            width: self.width,
            height: self.height,
            channels: self.channels,
            pixels: self.pixels,
        }
    }

    /// Raw entry of a pixel, without the 255 defaulting
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `x` or `y` lies outside the image
    pub fn raw_pixel(&self, x: i64, y: i64) -> Result<&ChannelValues> {
        let index = check_pixel(self.width, self.height, x, y)?;
        self.pixels
            .get(index)
            .ok_or_else(|| out_of_bounds(x, y, self.width, self.height))
    }
}

impl PixelSource for PixelStore {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn channels(&self) -> &[String] {
        &self.channels
    }

    fn channel_values(&self, x: i64, y: i64) -> Result<ChannelValues> {
        let pixel = self.raw_pixel(x, y)?;
        Ok(self
            .channels
            .iter()
            .map(|channel| (channel, pixel.value(channel)))
            .collect())
    }

    fn set_channel_values_for_pixel(
        &mut self,
        x: i64,
        y: i64,
        values: &ChannelValues,
    ) -> Result<&mut Self> {
        let index = check_pixel(self.width, self.height, x, y)?;
        if let Some((channel, _)) = values
            .iter()
            .find(|(channel, _)| !self.channels.iter().any(|name| name.as_str() == *channel))
        {
            return Err(invalid_argument(
                "channel",
                &channel,
                &"channel is not declared by this store",
            ));
        }

        if let Some(pixel) = self.pixels.get_mut(index) {
            pixel.merge(values);
        }
        Ok(self)
    }
}
