#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod frame_buffer;
pub mod frame_scheduler;
pub mod intent;
mod log;
pub mod renderer;
pub mod state;

pub use animation::{AnimationEngine, AnimationPhase};
pub use config::{MATRIX_COLS, MATRIX_ROWS, MatrixConfig, PIXEL_COUNT};
pub use error::Error;
pub use frame_buffer::{Frame, FrameBuffer, PixelEntry, PixelUpdate};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent::{MatrixIntent, PixelUpdates, brightness_from_percent};
pub use renderer::{HardwareLock, Renderer};
pub use state::{DisplayMode, DisplaySnapshot, DisplayState, SharedDisplay};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// Channels arrive already scaled and in wire order.
pub trait StripDriver {
    type Error: core::fmt::Debug;

    /// Stage one pixel for the next refresh
    fn set_pixel(&mut self, index: usize, c1: u8, c2: u8, c3: u8) -> Result<(), Self::Error>;

    /// Latch all staged pixels onto the strip
    fn refresh(&mut self) -> Result<(), Self::Error>;
}

/// Source of random words for the random mode
///
/// Backed by the hardware RNG on device.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}
