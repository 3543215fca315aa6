//! Shared display state
//!
//! [`SharedDisplay`] owns the frame buffer and the display settings behind a
//! single critical-section lock. Mutators hold it only while writing; the
//! scheduler holds it only while copying a [`DisplaySnapshot`]. Nothing holds it
//! across hardware access.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;

use crate::color::Rgb;
use crate::config::{MatrixConfig, PIXEL_COUNT};
use crate::error::Error;
use crate::frame_buffer::{Frame, FrameBuffer, PixelEntry, PixelUpdate};
use crate::log::{log_info, log_warn};

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_CHECKERBOARD: &str = "checkerboard";
const MODE_NAME_GRADIENT: &str = "gradient";
const MODE_NAME_RANDOM: &str = "random";

const MODE_ID_STATIC: u8 = 0;
const MODE_ID_RAINBOW: u8 = 1;
const MODE_ID_CHECKERBOARD: u8 = 2;
const MODE_ID_GRADIENT: u8 = 3;
const MODE_ID_RANDOM: u8 = 4;

/// Known display modes. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    /// Shows the frame buffer as drawn
    #[default]
    Static = MODE_ID_STATIC,
    /// Hue sweep across all pixels
    Rainbow = MODE_ID_RAINBOW,
    /// Primary and secondary colors alternating by cell
    Checkerboard = MODE_ID_CHECKERBOARD,
    /// Primary to secondary blend scrolling across columns
    Gradient = MODE_ID_GRADIENT,
    /// Random noise
    Random = MODE_ID_RANDOM,
}

impl DisplayMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STATIC => Self::Static,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_CHECKERBOARD => Self::Checkerboard,
            MODE_ID_GRADIENT => Self::Gradient,
            MODE_ID_RANDOM => Self::Random,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => MODE_NAME_STATIC,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Checkerboard => MODE_NAME_CHECKERBOARD,
            Self::Gradient => MODE_NAME_GRADIENT,
            Self::Random => MODE_NAME_RANDOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STATIC => Some(Self::Static),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_CHECKERBOARD => Some(Self::Checkerboard),
            MODE_NAME_GRADIENT => Some(Self::Gradient),
            MODE_NAME_RANDOM => Some(Self::Random),
            _ => None,
        }
    }

    /// Interval between render ticks while this mode is active
    ///
    /// Static has nothing to animate; its cadence only bounds how long a
    /// frame buffer edit waits before reaching the strip.
    pub const fn cadence(self) -> Duration {
        match self {
            Self::Static | Self::Gradient => Duration::from_millis(100),
            Self::Rainbow => Duration::from_millis(50),
            Self::Checkerboard => Duration::from_millis(500),
            Self::Random => Duration::from_millis(200),
        }
    }
}

/// Externally settable display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub mode: DisplayMode,
    pub primary: Rgb,
    pub secondary: Rgb,
    /// Scale factor applied at render time (0-255 = 0.0-1.0)
    pub brightness: u8,
}

impl DisplayState {
    pub const fn new(config: &MatrixConfig) -> Self {
        Self {
            mode: config.mode,
            primary: config.primary,
            secondary: config.secondary,
            brightness: config.brightness,
        }
    }
}

/// Consistent copy of everything a render tick reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    pub state: DisplayState,
    pub pixels: Frame,
}

#[derive(Debug)]
struct DisplayModel {
    state: DisplayState,
    frame_buffer: FrameBuffer,
}

/// Frame buffer and display state shared between mutators and the renderer
///
/// All setters take effect on the next render tick. Separate setter calls are
/// not transactional with respect to each other.
pub struct SharedDisplay {
    inner: Mutex<RefCell<DisplayModel>>,
}

impl SharedDisplay {
    pub const fn new(config: &MatrixConfig) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(DisplayModel {
                state: DisplayState::new(config),
                frame_buffer: FrameBuffer::new(),
            })),
        }
    }

    fn with<T>(&self, f: impl FnOnce(&mut DisplayModel) -> T) -> T {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    /// Copy state and pixels under one lock acquisition
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.with(|model| DisplaySnapshot {
            state: model.state,
            pixels: model.frame_buffer.frame(),
        })
    }

    pub fn state(&self) -> DisplayState {
        self.with(|model| model.state)
    }

    pub fn mode(&self) -> DisplayMode {
        self.with(|model| model.state.mode)
    }

    pub fn set_mode(&self, mode: DisplayMode) {
        log_info!("[SharedDisplay.set_mode] switching to {}", mode.as_str());
        self.with(|model| model.state.mode = mode);
    }

    /// Switch mode by name
    ///
    /// An unrecognized name leaves the current mode unchanged.
    pub fn set_mode_by_name(&self, name: &str) -> Result<(), Error> {
        let Some(mode) = DisplayMode::parse_from_str(name) else {
            log_warn!("[SharedDisplay.set_mode_by_name] unknown mode {:?}", name);
            return Err(Error::UnknownMode);
        };
        self.set_mode(mode);
        Ok(())
    }

    pub fn set_primary_color(&self, color: Rgb) {
        self.with(|model| model.state.primary = color);
    }

    pub fn set_secondary_color(&self, color: Rgb) {
        self.with(|model| model.state.secondary = color);
    }

    pub fn set_brightness(&self, brightness: u8) {
        self.with(|model| model.state.brightness = brightness);
    }

    pub fn set_pixel(&self, row: usize, col: usize, color: Rgb) -> Result<(), Error> {
        self.with(|model| model.frame_buffer.set_pixel(row, col, color))
    }

    /// Apply a batch of pixel updates atomically
    pub fn set_pixels(&self, updates: &[PixelUpdate]) -> Result<(), Error> {
        self.with(|model| model.frame_buffer.apply(updates))
    }

    pub fn fill(&self, color: Rgb) {
        self.with(|model| model.frame_buffer.fill(color));
    }

    pub fn get_pixel(&self, row: usize, col: usize) -> Result<Rgb, Error> {
        self.with(|model| model.frame_buffer.get_pixel(row, col))
    }

    pub fn get_all(&self) -> [PixelEntry; PIXEL_COUNT] {
        self.with(|model| model.frame_buffer.get_all())
    }
}

impl Default for SharedDisplay {
    fn default() -> Self {
        Self::new(&MatrixConfig::DEFAULT)
    }
}
