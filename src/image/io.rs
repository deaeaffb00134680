//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{GrayImage, ImageView};
use crate::util::{SurfError, SurfResult};
use std::path::Path;

/// Creates a borrowed view from an 8-bit grayscale image buffer.
pub fn view_from_luma(img: &image::GrayImage) -> SurfResult<ImageView<'_, u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageView::from_slice(img.as_raw(), width, height)
}

/// Converts any decoded image to a normalized single-channel `f32` image.
pub fn gray_from_dynamic_image(img: &image::DynamicImage) -> SurfResult<GrayImage> {
    let luma = img.to_luma8();
    GrayImage::from_u8(view_from_luma(&luma)?)
}

/// Loads an image from disk and converts it to normalized grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> SurfResult<GrayImage> {
    gray_from_dynamic_image(&open(path.as_ref())?)
}

/// Loads an image from disk as 8-bit RGB, suitable as a drawing surface.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> SurfResult<image::RgbImage> {
    Ok(open(path.as_ref())?.to_rgb8())
}

/// Encodes an RGB image to disk; the format follows the file extension.
pub fn save_rgb_image<P: AsRef<Path>>(img: &image::RgbImage, path: P) -> SurfResult<()> {
    img.save(path).map_err(|err| SurfError::ImageIo {
        reason: err.to_string(),
    })
}

fn open(path: &Path) -> SurfResult<image::DynamicImage> {
    image::open(path).map_err(|err| SurfError::ImageIo {
        reason: err.to_string(),
    })
}
