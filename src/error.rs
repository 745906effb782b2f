use thiserror::Error;

/// Errors reported by buffer construction and the resize entry points.
///
/// Every failure is reported synchronously before any output allocation;
/// there is no partial-failure mode. A zero-sized output dimension is not
/// an error, it produces a valid empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResizeError {
    #[error("scale factors must be finite and greater than 0, got fx={fx}, fy={fy}")]
    InvalidScale { fx: f64, fy: f64 },

    #[error("invalid interpolation selector, must be 0-3, got {value}")]
    UnknownKernel { value: i64 },

    #[error("unsupported channel count {channels}, must be 1 (gray) or 4 (RGBA)")]
    InvalidChannelCount { channels: usize },

    #[error("pixel data length mismatch, expected {expected} samples, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    #[error(
        "sub-view {width}x{height} at ({x}, {y}) does not fit in a {buf_width}x{buf_height} buffer"
    )]
    ViewOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        buf_width: usize,
        buf_height: usize,
    },
}

pub type Result<T> = std::result::Result<T, ResizeError>;
