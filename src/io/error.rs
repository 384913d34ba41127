//! Error types for pixel access, partitioning and image adapters

use std::fmt;
use std::path::PathBuf;

/// Main error type for all cell operations
#[derive(Debug)]
pub enum CellError {
    /// Pixel or region coordinates fall outside the source dimensions
    ///
    /// Never clamped: a region read that touches one out-of-range pixel
    /// fails as a whole.
    OutOfBounds {
        /// Offending column (signed so that negative requests are representable)
        x: i64,
        /// Offending row
        y: i64,
        /// Source width at the time of the read
        width: u32,
        /// Source height at the time of the read
        height: u32,
    },

    /// Caller supplied a parameter outside its valid domain
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Statistics requested over a cell with zero area
    EmptyRegion {
        /// Cell origin column
        x: u32,
        /// Cell origin row
        y: u32,
        /// Cell width
        width: u32,
        /// Cell height
        height: u32,
    },

    /// Construction snapshot doesn't match its declared shape
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode a cell image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel coordinates out of bounds: ({x}, {y}) outside {width}x{height}"
                )
            }
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyRegion {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Empty region at ({x}, {y}) with size {width}x{height} has no pixels to analyze"
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for cell results
pub type Result<T> = std::result::Result<T, CellError>;

impl From<std::io::Error> for CellError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CellError {
    CellError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a pixel read against a `width` x `height` source
pub const fn out_of_bounds(x: i64, y: i64, width: u32, height: u32) -> CellError {
    CellError::OutOfBounds {
        x,
        y,
        width,
        height,
    }
}
