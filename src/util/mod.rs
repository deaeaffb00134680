//! Shared utility helpers.

pub mod error;
pub mod math;

pub use error::{SurfError, SurfResult};
pub use math::f_round;
