
use crate::error::{ResizeError, Result};

/// Number of 8-bit samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Single-channel luminance.
    Gray = 1,
    /// Four-channel R, G, B, A.
    Rgba = 4,
}

impl Channels {
    #[must_use]
    pub fn count(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Channels {
    type Error = ResizeError;

    fn try_from(channels: usize) -> Result<Self> {
        Ok(match channels {
            1 => Self::Gray,
            4 => Self::Rgba,
            _ => return Err(ResizeError::InvalidChannelCount { channels }),
        })
    }
}

/// An owned, row-major grid of 8-bit pixel samples.
///
/// The buffer always sits at origin (0, 0) with a tight stride of
/// `width * channels` samples per row. Zero-sized dimensions are valid and
/// hold no data. Sub-region views into the same storage are created with
/// [`PixelBuffer::sub_view`] without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: Channels,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer of the given dimensions.
    #[must_use]
    pub fn new(width: usize, height: usize, channels: Channels) -> Self {
        Self {
            data: vec![0; width * height * channels.count()],
            width,
            height,
            channels,
        }
    }

    /// Wraps existing row-major sample data.
    ///
    /// Fails with [`ResizeError::InvalidDataLength`] if `data` does not hold
    /// exactly `width * height * channels` samples.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self> {
        let expected = width * height * channels.count();
        if data.len() != expected {
            return Err(ResizeError::InvalidDataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Reads one channel of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate or channel index is out of bounds.
    #[must_use]
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> u8 {
        assert!(
            x < self.width && y < self.height && channel < self.channels.count(),
            "sample ({x}, {y}, channel {channel}) out of bounds"
        );
        self.data[(y * self.width + x) * self.channels.count() + channel]
    }

    /// Writes one channel of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate or channel index is out of bounds.
    pub fn set_sample(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        assert!(
            x < self.width && y < self.height && channel < self.channels.count(),
            "sample ({x}, {y}, channel {channel}) out of bounds"
        );
        self.data[(y * self.width + x) * self.channels.count() + channel] = value;
    }

    /// A read-only view of the whole buffer.
    #[must_use]
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            stride: self.width,
            origin_x: 0,
            origin_y: 0,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// A read-only view of the `width x height` sub-region whose top-left
    /// corner is `(x, y)`, sharing this buffer's storage.
    ///
    /// All storage arithmetic inside the view adds the origin offset, so the
    /// view behaves as a standalone `width x height` image.
    pub fn sub_view(&self, x: usize, y: usize, width: usize, height: usize) -> Result<PixelView<'_>> {
        if x.checked_add(width).is_none_or(|end| end > self.width)
            || y.checked_add(height).is_none_or(|end| end > self.height)
        {
            return Err(ResizeError::ViewOutOfBounds {
                x,
                y,
                width,
                height,
                buf_width: self.width,
                buf_height: self.height,
            });
        }
        Ok(PixelView {
            data: &self.data,
            stride: self.width,
            origin_x: x,
            origin_y: y,
            width,
            height,
            channels: self.channels,
        })
    }
}

/// A borrowed, read-only rectangular view into a [`PixelBuffer`].
///
/// Carries the origin offset and the parent row stride; `(0, 0)` in view
/// coordinates is the view's own top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    data: &'a [u8],
    /// Parent row stride in pixels.
    stride: usize,
    origin_x: usize,
    origin_y: usize,
    width: usize,
    height: usize,
    channels: Channels,
}

impl<'a> PixelView<'a> {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Reads one channel of the pixel at view-local `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate or channel index is out of bounds.
    #[must_use]
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> u8 {
        assert!(
            x < self.width && y < self.height && channel < self.channels.count(),
            "sample ({x}, {y}, channel {channel}) out of bounds"
        );
        let px = self.origin_x + x;
        let py = self.origin_y + y;
        self.data[(py * self.stride + px) * self.channels.count() + channel]
    }

    /// Copies the viewed region out into a standalone buffer at origin (0, 0).
    #[must_use]
    pub fn to_buffer(&self) -> PixelBuffer {
        let samples = self.channels.count();
        let mut data = Vec::with_capacity(self.width * self.height * samples);
        for y in 0..self.height {
            let row = (self.origin_y + y) * self.stride + self.origin_x;
            data.extend_from_slice(&self.data[row * samples..(row + self.width) * samples]);
        }
        PixelBuffer {
            data,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

impl<'a> From<&'a PixelBuffer> for PixelView<'a> {
    fn from(buffer: &'a PixelBuffer) -> Self {
        buffer.view()
    }
}
