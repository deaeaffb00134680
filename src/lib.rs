//! surfcore holds the data structures shared by SURF-style feature pipelines.
//!
//! It builds integral images from normalized grayscale input, models
//! interest points with their 64-value descriptors, persists them in the
//! plain-text feature file format, and draws them (alone, as clusters, or as
//! matches across two images) onto any [`Canvas`]. Detection, description and
//! matching are left to upstream crates.

pub mod codec;
pub mod image;
pub mod integral;
pub mod ipoint;
pub mod render;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use codec::{load_surf, read_surf, save_surf, write_surf};
pub use crate::image::{GrayImage, ImageView};
pub use integral::IntegralImage;
pub use ipoint::{Correspondence, Descriptor, Ipoint, Laplacian, Orientation, DESCRIPTOR_LEN};
pub use render::{palette_color, Canvas, Color, Fill, FpsCounter, IpointStyle, Point, Primitive};
pub use util::{f_round, SurfError, SurfResult};
