//! Image views and owned grayscale buffers.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride
//! and channel count. The stride counts elements between the starts of
//! consecutive rows, so a stride larger than `width * channels` represents
//! padded rows. ROI slices are zero-copy views into the same backing slice and
//! retain the original stride.

use crate::util::{SurfError, SurfResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
    channels: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous single-channel view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> SurfResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a single-channel view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> SurfResult<Self> {
        Self::with_channels(data, width, height, stride, 1)
    }

    /// Creates an interleaved view with `channels` samples per pixel.
    pub fn with_channels(
        data: &'a [T],
        width: usize,
        height: usize,
        stride: usize,
        channels: usize,
    ) -> SurfResult<Self> {
        if channels == 0 {
            return Err(SurfError::UnsupportedChannels { channels });
        }
        let needed = required_len(width, height, stride, channels)?;
        if data.len() < needed {
            return Err(SurfError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            channels,
        })
    }

    /// Single-channel view over a buffer already known to hold `width * height` samples.
    pub(crate) fn contiguous(data: &'a [T], width: usize, height: usize) -> Self {
        debug_assert!(data.len() >= width * height);
        Self {
            data,
            width,
            height,
            stride: width,
            channels: 1,
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the number of interleaved samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the first channel of the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y
            .checked_mul(self.stride)?
            .checked_add(x.checked_mul(self.channels)?)?;
        self.data.get(idx)
    }

    /// Returns the samples of row `y` (`width * channels` elements).
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width.checked_mul(self.channels)?)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(&self, x: usize, y: usize, width: usize, height: usize) -> SurfResult<Self> {
        if width == 0 || height == 0 {
            return Err(SurfError::InvalidDimensions { width, height });
        }
        let fits = x
            .checked_add(width)
            .zip(y.checked_add(height))
            .is_some_and(|(end_x, end_y)| end_x <= self.width && end_y <= self.height);
        if !fits {
            return Err(SurfError::InvalidInput("roi exceeds image bounds"));
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x * self.channels))
            .ok_or(SurfError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self.data.get(start..).ok_or(SurfError::BufferTooSmall {
            needed: start.saturating_add(1),
            got: self.data.len(),
        })?;

        Self::with_channels(data, width, height, self.stride, self.channels)
    }
}

fn required_len(
    width: usize,
    height: usize,
    stride: usize,
    channels: usize,
) -> SurfResult<usize> {
    if width == 0 || height == 0 {
        return Err(SurfError::InvalidDimensions { width, height });
    }
    let row_len = width
        .checked_mul(channels)
        .ok_or(SurfError::InvalidDimensions { width, height })?;
    if stride < row_len {
        return Err(SurfError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_len))
        .ok_or(SurfError::InvalidDimensions { width, height })
}

/// Owned contiguous single-channel `f32` image.
///
/// Samples are expected in the unit range, which keeps integral sums bounded
/// by `width * height`.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayImage {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl GrayImage {
    /// Wraps a row-major buffer of exactly `width * height` samples.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> SurfResult<Self> {
        if width == 0 || height == 0 {
            return Err(SurfError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(SurfError::InvalidDimensions { width, height })?;
        if data.len() != needed {
            return Err(SurfError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Converts 8-bit samples to the unit range by dividing by 255.
    pub fn from_u8(view: ImageView<'_, u8>) -> SurfResult<Self> {
        if view.channels() != 1 {
            return Err(SurfError::UnsupportedChannels {
                channels: view.channels(),
            });
        }
        let mut data = Vec::with_capacity(view.width() * view.height());
        for y in 0..view.height() {
            let row = view.row(y).ok_or(SurfError::BufferTooSmall {
                needed: (y + 1) * view.stride(),
                got: view.as_slice().len(),
            })?;
            data.extend(row.iter().map(|&v| f32::from(v) / 255.0));
        }
        Self::new(data, view.width(), view.height())
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major samples.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, f32> {
        ImageView::contiguous(&self.data, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{GrayImage, ImageView};
    use crate::util::SurfError;

    #[test]
    fn interleaved_rows_span_all_channels() {
        let data: Vec<u8> = (0u8..12).collect();
        let view = ImageView::with_channels(&data, 2, 2, 6, 3).unwrap();
        assert_eq!(view.row(1).unwrap(), &[6, 7, 8, 9, 10, 11]);
        assert_eq!(view.get(1, 0).copied(), Some(3));
    }

    #[test]
    fn zero_channels_rejected() {
        let data = [0u8; 4];
        let err = ImageView::with_channels(&data, 2, 2, 2, 0).unwrap_err();
        assert_eq!(err, SurfError::UnsupportedChannels { channels: 0 });
    }

    #[test]
    fn from_u8_normalizes() {
        let data = [0u8, 255, 51, 102];
        let view = ImageView::from_slice(&data, 2, 2).unwrap();
        let gray = GrayImage::from_u8(view).unwrap();
        assert_eq!(gray.data()[0], 0.0);
        assert_eq!(gray.data()[1], 1.0);
        assert!((gray.data()[2] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn gray_image_requires_exact_len() {
        let err = GrayImage::new(vec![0.0; 5], 2, 2).unwrap_err();
        assert_eq!(err, SurfError::BufferTooSmall { needed: 4, got: 5 });
    }
}
