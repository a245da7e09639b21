//! Error types for scpl operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a plot.
///
/// Degenerate *data* is never an error: rows with non-finite coordinates are
/// filtered out, and zero-variance statistics propagate `NaN` into geometry
/// that SVG renderers drop silently. Only invalid canvas geometry and file
/// output can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (writing rendered markup to a file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Canvas dimensions that leave no drawable plot area.
    #[error("Invalid canvas: {width}x{height} with padding leaves no plot area")]
    InvalidCanvas {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_canvas_display() {
        let err = Error::InvalidCanvas {
            width: 0,
            height: 400,
        };
        assert!(err.to_string().contains("0x400"));
    }
}
