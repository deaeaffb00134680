//! Error types for surfcore.

use thiserror::Error;

/// Result alias for surfcore operations.
pub type SurfResult<T> = std::result::Result<T, SurfError>;

/// Errors that can occur when building integral images or moving features
/// in and out of files.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SurfError {
    /// Image dimensions are zero or overflow.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Stride is smaller than one row of samples.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer cannot hold the described image.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Only single-channel images are accepted.
    #[error("unsupported channel count {channels}, expected 1")]
    UnsupportedChannels { channels: usize },
    /// The image holds no samples.
    #[error("empty image")]
    EmptyImage,
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A feature file is corrupt or uses an incompatible layout.
    #[error("format error at line {line}: {reason}")]
    Format { line: usize, reason: String },
    /// Opening, reading or writing a feature file failed.
    #[error("i/o error on {path}: {reason}")]
    Io { path: String, reason: String },
    /// Image decoding or encoding failed.
    #[error("image i/o error: {reason}")]
    ImageIo { reason: String },
}

impl SurfError {
    /// Returns true for malformed or empty image input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SurfError::InvalidDimensions { .. }
                | SurfError::InvalidStride { .. }
                | SurfError::BufferTooSmall { .. }
                | SurfError::UnsupportedChannels { .. }
                | SurfError::EmptyImage
                | SurfError::InvalidInput(_)
        )
    }

    /// Returns true for corrupt or incompatible feature files.
    pub fn is_format(&self) -> bool {
        matches!(self, SurfError::Format { .. })
    }

    /// Returns true for file open/read/write failures.
    pub fn is_io(&self) -> bool {
        matches!(self, SurfError::Io { .. } | SurfError::ImageIo { .. })
    }

    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        SurfError::Format {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        SurfError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SurfError;

    #[test]
    fn classification_matches_taxonomy() {
        assert!(SurfError::EmptyImage.is_invalid_input());
        assert!(SurfError::UnsupportedChannels { channels: 3 }.is_invalid_input());
        assert!(SurfError::format(2, "bad").is_format());
        assert!(!SurfError::format(2, "bad").is_io());
        let io = SurfError::Io {
            path: "a.surf".into(),
            reason: "denied".into(),
        };
        assert!(io.is_io());
        assert!(!io.is_invalid_input());
    }

    #[test]
    fn format_error_mentions_line() {
        let err = SurfError::format(3, "expected 70 fields, found 12");
        assert_eq!(
            err.to_string(),
            "format error at line 3: expected 70 fields, found 12"
        );
    }
}
