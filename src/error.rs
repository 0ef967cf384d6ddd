//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcball crate.
#[derive(Debug)]
pub enum ArcballError {
    /// Trackball constructed or resized with a non-positive canvas
    /// dimension.
    InvalidCanvasDimensions {
        /// Offending width in pixels.
        width: f32,
        /// Offending height in pixels.
        height: f32,
    },
    /// Attempted to normalize a zero-length vector.
    DegenerateVector,
    /// `look_at` was given a forward axis parallel to the up hint; the
    /// caller must supply a different up vector.
    DegenerateCameraBasis,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ArcballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCanvasDimensions { width, height } => {
                write!(f, "invalid canvas dimensions: {width}x{height}")
            }
            Self::DegenerateVector => {
                write!(f, "cannot normalize a zero-length vector")
            }
            Self::DegenerateCameraBasis => {
                write!(f, "camera forward axis is parallel to the up vector")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ArcballError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcballError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
