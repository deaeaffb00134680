//! Interest point records shared by the codec and the renderer.
//!
//! An [`Ipoint`] is produced by an upstream detector/descriptor stage and is
//! read-only afterwards, except for the cluster tag which a clustering pass may
//! assign later.

use crate::util::{SurfError, SurfResult};

/// Number of entries in a SURF descriptor.
pub const DESCRIPTOR_LEN: usize = 64;

/// Fixed-length appearance signature of an interest point.
pub type Descriptor = [f32; DESCRIPTOR_LEN];

/// Sign of the Laplacian response at a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Laplacian {
    /// Light blob on a dark background (code 0).
    LightOnDark,
    /// Dark blob on a light background (code 1).
    DarkOnLight,
    /// No polarity assigned (code 9).
    Unclassified,
}

impl Laplacian {
    /// Returns the integer tag used in feature files.
    pub fn code(self) -> i32 {
        match self {
            Laplacian::LightOnDark => 0,
            Laplacian::DarkOnLight => 1,
            Laplacian::Unclassified => 9,
        }
    }

    /// Parses an integer tag; only 0, 1 and 9 are valid.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Laplacian::LightOnDark),
            1 => Some(Laplacian::DarkOnLight),
            9 => Some(Laplacian::Unclassified),
            _ => None,
        }
    }
}

/// Dominant orientation of an interest point.
///
/// Upright extraction skips orientation assignment; that case is kept apart
/// from a measured angle of exactly zero radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    /// Upright feature, no orientation assigned.
    NotComputed,
    /// Measured orientation in radians.
    Computed(f32),
}

impl Orientation {
    /// Interprets a raw angle where `0.0` marks an upright feature.
    pub fn from_radians(radians: f32) -> Self {
        if radians == 0.0 {
            Orientation::NotComputed
        } else {
            Orientation::Computed(radians)
        }
    }

    /// Returns the angle in radians, `0.0` for upright features.
    pub fn radians(self) -> f32 {
        match self {
            Orientation::NotComputed => 0.0,
            Orientation::Computed(angle) => angle,
        }
    }

    /// Returns the measured angle, if any.
    pub fn angle(self) -> Option<f32> {
        match self {
            Orientation::NotComputed => None,
            Orientation::Computed(angle) => Some(angle),
        }
    }
}

/// One detected interest point with its descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Ipoint {
    x: f32,
    y: f32,
    scale: f32,
    orientation: Orientation,
    laplacian: Laplacian,
    descriptor: Descriptor,
    dx: f32,
    dy: f32,
    cluster_index: usize,
}

impl Ipoint {
    /// Creates a record at sub-pixel `(x, y)`.
    ///
    /// Fails unless `scale` is finite and strictly positive and the location
    /// is finite.
    pub fn new(
        x: f32,
        y: f32,
        scale: f32,
        orientation: Orientation,
        laplacian: Laplacian,
        descriptor: Descriptor,
    ) -> SurfResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SurfError::InvalidInput("scale must be finite and > 0"));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(SurfError::InvalidInput("location must be finite"));
        }
        Ok(Self {
            x,
            y,
            scale,
            orientation,
            laplacian,
            descriptor,
            dx: 0.0,
            dy: 0.0,
            cluster_index: 0,
        })
    }

    /// Creates a record from a descriptor slice that must hold 64 values.
    pub fn from_slice(
        x: f32,
        y: f32,
        scale: f32,
        orientation: Orientation,
        laplacian: Laplacian,
        descriptor: &[f32],
    ) -> SurfResult<Self> {
        let descriptor: Descriptor = descriptor
            .try_into()
            .map_err(|_| SurfError::InvalidInput("descriptor must hold 64 values"))?;
        Self::new(x, y, scale, orientation, laplacian, descriptor)
    }

    /// Attaches a frame-to-frame displacement used for motion tails.
    pub fn with_motion(mut self, dx: f32, dy: f32) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Returns the column coordinate.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the row coordinate.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the detection scale (sigma).
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn laplacian(&self) -> Laplacian {
        self.laplacian
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Returns the motion vector `(dx, dy)`, zero when unused.
    pub fn motion(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    pub fn cluster_index(&self) -> usize {
        self.cluster_index
    }

    /// Assigns the cluster tag chosen by an external clustering pass.
    pub fn set_cluster_index(&mut self, index: usize) {
        self.cluster_index = index;
    }

    /// Euclidean distance between the two descriptors.
    pub fn descriptor_distance(&self, other: &Ipoint) -> f32 {
        self.descriptor
            .iter()
            .zip(other.descriptor.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }
}

/// A pair of interest points from two images asserted to show the same
/// physical point.
#[derive(Clone, Debug, PartialEq)]
pub struct Correspondence {
    /// Point in the first (left) image.
    pub first: Ipoint,
    /// Point in the second (right) image.
    pub second: Ipoint,
}

impl Correspondence {
    pub fn new(first: Ipoint, second: Ipoint) -> Self {
        Self { first, second }
    }
}

impl From<(Ipoint, Ipoint)> for Correspondence {
    fn from((first, second): (Ipoint, Ipoint)) -> Self {
        Self { first, second }
    }
}
