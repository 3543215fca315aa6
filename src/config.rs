//! Static configuration consumed at startup.

use embassy_time::Duration;

use crate::color::Rgb;
use crate::state::DisplayMode;

/// Number of matrix rows
pub const MATRIX_ROWS: usize = 8;

/// Number of matrix columns
pub const MATRIX_COLS: usize = 8;

/// Number of LEDs on the strip
pub const PIXEL_COUNT: usize = MATRIX_ROWS * MATRIX_COLS;

/// 5% of full scale
pub const DEFAULT_BRIGHTNESS: u8 = 12;

pub const DEFAULT_PRIMARY_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const DEFAULT_SECONDARY_COLOR: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// Longest wait for the hardware transaction path before a frame is dropped
pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_millis(100);

/// Configuration for the display engine
#[derive(Debug, Clone, Copy)]
pub struct MatrixConfig {
    pub mode: DisplayMode,
    pub brightness: u8,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub refresh_timeout: Duration,
}

impl MatrixConfig {
    pub const DEFAULT: Self = Self {
        mode: DisplayMode::Static,
        brightness: DEFAULT_BRIGHTNESS,
        primary: DEFAULT_PRIMARY_COLOR,
        secondary: DEFAULT_SECONDARY_COLOR,
        refresh_timeout: DEFAULT_REFRESH_TIMEOUT,
    };
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
