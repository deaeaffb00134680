//! Rayon-parallel integral image construction (feature-gated).
//!
//! Row prefix sums are independent, so they run in parallel; the vertical
//! accumulation then walks rows top to bottom. Every cell is still computed as
//! `row_prefix + above`, so the result is bit-identical to
//! [`IntegralImage::build`].

use crate::image::ImageView;
use crate::integral::{prefix_row, source_row, validate, IntegralImage};
use crate::trace::{trace_event, trace_span};
use crate::util::SurfResult;
use rayon::prelude::*;

impl IntegralImage {
    /// Row-parallel variant of [`IntegralImage::build`].
    pub fn build_par(image: ImageView<'_, f32>) -> SurfResult<Self> {
        let _span = trace_span!("integral_build_par").entered();
        let (width, height) = validate(&image)?;
        let mut data = vec![0.0f32; width * height];

        data.par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(y, dst)| -> SurfResult<()> {
                prefix_row(source_row(&image, y)?, dst);
                Ok(())
            })?;

        for y in 1..height {
            let (above, rest) = data.split_at_mut(y * width);
            let above = &above[(y - 1) * width..];
            for (out, &up) in rest[..width].iter_mut().zip(above) {
                *out += up;
            }
        }

        trace_event!("integral_built", width = width, height = height);
        Ok(Self {
            data,
            width,
            height,
        })
    }
}
