use core::fmt;

/// Errors reported by the display engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinate outside the matrix
    OutOfRange { row: usize, col: usize },
    /// Raw channel value outside 0-255
    InvalidChannelValue(i32),
    /// Hardware lock was not acquired in time, the frame was dropped
    HardwareRefreshTimeout,
    /// Strip driver rejected the refresh
    RefreshFailed,
    /// Mode name is not recognized
    UnknownMode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { row, col } => {
                write!(f, "pixel ({row}, {col}) is outside the matrix")
            }
            Self::InvalidChannelValue(value) => {
                write!(f, "channel value {value} is outside 0-255")
            }
            Self::HardwareRefreshTimeout => f.write_str("hardware lock timed out"),
            Self::RefreshFailed => f.write_str("strip refresh failed"),
            Self::UnknownMode => f.write_str("unknown display mode"),
        }
    }
}

impl core::error::Error for Error {}
