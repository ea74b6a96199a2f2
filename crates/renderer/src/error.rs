//! Error types for map rendering.

use aurora_common::MapSize;
use ovation_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while rendering a map.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The activity feed has no usable data section.
    #[error(transparent)]
    Format(#[from] ParseError),

    /// The base image does not have the required size.
    #[error("wrong image size {actual}, requires an image size of {required}")]
    Dimension { actual: MapSize, required: MapSize },

    /// Loading the base image or writing the output failed.
    #[error("image I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Create a Dimension error.
    pub fn dimension(actual: MapSize, required: MapSize) -> Self {
        Self::Dimension { actual, required }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Self::Io(io),
            other => Self::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                other.to_string(),
            )),
        }
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
