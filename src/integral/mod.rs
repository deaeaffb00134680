//! Summed-area tables over normalized grayscale images.
//!
//! Cell `(x, y)` of an [`IntegralImage`] holds the sum of every source sample
//! with column `<= x` and row `<= y`. Each output row is the running prefix sum
//! of its source row plus the output row above, accumulated in `f32` from left
//! to right. Any axis-aligned box sum then costs four lookups.

use crate::image::ImageView;
use crate::trace::{trace_event, trace_span};
use crate::util::{SurfError, SurfResult};

#[cfg(feature = "rayon")]
pub mod rayon;

/// Owned summed-area table with the dimensions of its source image.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegralImage {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl IntegralImage {
    /// Builds the table in a single top-to-bottom, left-to-right pass.
    ///
    /// The source must hold exactly one channel; interleaved color data is
    /// rejected with [`SurfError::UnsupportedChannels`].
    pub fn build(image: ImageView<'_, f32>) -> SurfResult<Self> {
        let _span = trace_span!("integral_build").entered();
        let (width, height) = validate(&image)?;
        let mut data = vec![0.0f32; width * height];

        let first = source_row(&image, 0)?;
        prefix_row(first, &mut data[..width]);

        for y in 1..height {
            let src = source_row(&image, y)?;
            let (above, rest) = data.split_at_mut(y * width);
            let above = &above[(y - 1) * width..];
            accumulate_row(src, above, &mut rest[..width]);
        }

        trace_event!("integral_built", width = width, height = height);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the table width (equal to the source width).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the table height (equal to the source height).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major table.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a borrowed single-channel view of the table.
    pub fn view(&self) -> ImageView<'_, f32> {
        ImageView::contiguous(&self.data, self.width, self.height)
    }

    /// Returns the cumulative sum at `(x, y)`, or `None` outside the table.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Returns the sum of all source samples.
    pub fn total(&self) -> f32 {
        self.data[self.data.len() - 1]
    }

    /// Sums the source samples inside the box with top-left `(x, y)`.
    ///
    /// Returns `None` for empty boxes or boxes leaving the image; callers
    /// sampling near the border must clip first.
    pub fn box_sum(&self, x: usize, y: usize, width: usize, height: usize) -> Option<f32> {
        if width == 0 || height == 0 {
            return None;
        }
        let x1 = x.checked_add(width - 1)?;
        let y1 = y.checked_add(height - 1)?;
        let d = self.get(x1, y1)?;
        let b = if y > 0 { self.get(x1, y - 1)? } else { 0.0 };
        let c = if x > 0 { self.get(x - 1, y1)? } else { 0.0 };
        let a = if x > 0 && y > 0 {
            self.get(x - 1, y - 1)?
        } else {
            0.0
        };
        Some(a - b - c + d)
    }
}

fn validate(image: &ImageView<'_, f32>) -> SurfResult<(usize, usize)> {
    if image.channels() != 1 {
        return Err(SurfError::UnsupportedChannels {
            channels: image.channels(),
        });
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(SurfError::EmptyImage);
    }
    Ok((image.width(), image.height()))
}

fn source_row<'a>(image: &ImageView<'a, f32>, y: usize) -> SurfResult<&'a [f32]> {
    image.row(y).ok_or(SurfError::BufferTooSmall {
        needed: y * image.stride() + image.width(),
        got: image.as_slice().len(),
    })
}

#[inline]
fn prefix_row(src: &[f32], dst: &mut [f32]) {
    let mut rs = 0.0f32;
    for (out, &v) in dst.iter_mut().zip(src) {
        rs += v;
        *out = rs;
    }
}

#[inline]
fn accumulate_row(src: &[f32], above: &[f32], dst: &mut [f32]) {
    let mut rs = 0.0f32;
    for ((out, &v), &up) in dst.iter_mut().zip(src).zip(above) {
        rs += v;
        *out = rs + up;
    }
}
