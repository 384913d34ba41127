//! Dense surface backend laid out as (row, column, channel)

use ndarray::Array3;

use crate::io::configuration::MISSING_CHANNEL_VALUE;
use crate::io::error::{Result, invalid_argument, out_of_bounds};
use crate::pixel::source::{ChannelValues, ImageSnapshot, PixelSource, check_pixel};

/// Pixel source over a contiguous `height x width x channels` array
///
/// Works for any channel list, including single-channel greyscale sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStore {
    data: Array3<u8>,
    channels: Vec<String>,
}

impl ArrayStore {
    /// Wrap an existing array; its last axis must match `channels`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the channel axis length differs from
    /// the number of channel names
    pub fn new<S: AsRef<str>>(data: Array3<u8>, channels: &[S]) -> Result<Self> {
        let (_, _, depth) = data.dim();
        if depth != channels.len() || depth == 0 {
            return Err(invalid_argument(
                "channels",
                &channels.len(),
                &format!("expected {depth} non-empty channel names for the array depth"),
            ));
        }
        Ok(Self {
            data,
            channels: channels.iter().map(|c| c.as_ref().to_string()).collect(),
        })
    }

    /// Pack a construction snapshot into a dense array
    ///
    /// Channels a pixel entry lacks are filled with 255.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` for a pixel count mismatch, or
    /// `InvalidArgument` when no channel is declared
    pub fn from_snapshot(snapshot: &ImageSnapshot) -> Result<Self> {
        snapshot.validate()?;

        let width = snapshot.width as usize;
        let depth = snapshot.channels.len();
        let mut data = Array3::from_elem(
            (snapshot.height as usize, width, depth),
            MISSING_CHANNEL_VALUE,
        );

        for (index, pixel) in snapshot.pixels.iter().enumerate() {
            let (row, col) = (index / width, index % width);
            for (channel_index, channel) in snapshot.channels.iter().enumerate() {
                if let Some(slot) = data.get_mut((row, col, channel_index)) {
                    *slot = pixel.value(channel);
                }
            }
        }

        Self::new(data, &snapshot.channels)
    }

    /// Borrow the underlying array
    pub const fn data(&self) -> &Array3<u8> {
        &self.data
    }

    fn dims(&self) -> (u32, u32) {
        let (rows, cols, _) = self.data.dim();
        (cols as u32, rows as u32)
    }
}

impl PixelSource for ArrayStore {
    fn width(&self) -> u32 {
        self.dims().0
    }

    fn height(&self) -> u32 {
        self.dims().1
    }

    fn channels(&self) -> &[String] {
        &self.channels
    }

    fn channel_values(&self, x: i64, y: i64) -> Result<ChannelValues> {
        let (width, height) = self.dims();
        check_pixel(width, height, x, y)?;

        let (row, col) = (y as usize, x as usize);
        self.channels
            .iter()
            .enumerate()
            .map(|(index, channel)| {
                self.data
                    .get((row, col, index))
                    .map(|&value| (channel, value))
                    .ok_or_else(|| out_of_bounds(x, y, width, height))
            })
            .collect::<Result<Vec<_>>>()
            .map(|pairs| pairs.into_iter().collect())
    }

    fn set_channel_values_for_pixel(
        &mut self,
        x: i64,
        y: i64,
        values: &ChannelValues,
    ) -> Result<&mut Self> {
        let (width, height) = self.dims();
        check_pixel(width, height, x, y)?;

        // Resolve every channel before writing so a bad name leaves the pixel untouched
        let updates = values
            .iter()
            .map(|(channel, value)| {
                self.channels
                    .iter()
                    .position(|name| name == channel)
                    .map(|index| (index, value))
                    .ok_or_else(|| {
                        invalid_argument(
                            "channel",
                            &channel,
                            &"channel is not part of this surface",
                        )
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let (row, col) = (y as usize, x as usize);
        for (index, value) in updates {
            if let Some(slot) = self.data.get_mut((row, col, index)) {
                *slot = value;
            }
        }
        Ok(self)
    }
}
