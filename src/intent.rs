//! Intent processing module
//!
//! Contract between the request layer and the display core. Each intent maps
//! to one mutation of [`SharedDisplay`]; none of them redraws by itself.

use heapless::Vec;

use crate::color::Rgb;
use crate::config::PIXEL_COUNT;
use crate::error::Error;
use crate::frame_buffer::PixelUpdate;
use crate::state::SharedDisplay;

/// Batch of pixel updates, at most one per pixel
pub type PixelUpdates = Vec<PixelUpdate, PIXEL_COUNT>;

/// Represents a user intent to change the display.
#[derive(Debug, Clone)]
pub enum MatrixIntent<'a> {
    /// Update one frame buffer pixel
    SetPixel(PixelUpdate),
    /// Update the listed frame buffer pixels
    SetPixels(PixelUpdates),
    /// Fill the whole frame buffer with one color
    FillAll(Rgb),
    /// Switch mode by name; unknown names are ignored
    SetMode(&'a str),
    /// Set render brightness (0-255)
    SetBrightness(u8),
    SetPrimaryColor(Rgb),
    SetSecondaryColor(Rgb),
}

impl MatrixIntent<'_> {
    /// Check if the request layer should force a redraw after applying this
    pub const fn requests_redraw(&self) -> bool {
        matches!(
            self,
            Self::SetPixel(_) | Self::SetPixels(_) | Self::FillAll(_) | Self::SetBrightness(_)
        )
    }

    /// Apply the intent to the shared display
    ///
    /// A rejected intent leaves the display unchanged.
    pub fn apply(&self, display: &SharedDisplay) -> Result<(), Error> {
        match self {
            Self::SetPixel(update) => display.set_pixel(update.row, update.col, update.color),
            Self::SetPixels(updates) => display.set_pixels(updates),
            Self::FillAll(color) => {
                display.fill(*color);
                Ok(())
            }
            Self::SetMode(name) => display.set_mode_by_name(name),
            Self::SetBrightness(brightness) => {
                display.set_brightness(*brightness);
                Ok(())
            }
            Self::SetPrimaryColor(color) => {
                display.set_primary_color(*color);
                Ok(())
            }
            Self::SetSecondaryColor(color) => {
                display.set_secondary_color(*color);
                Ok(())
            }
        }
    }
}

/// Map a 0-100 brightness percentage the way the web endpoint does
///
/// Note the ceiling: 100% maps to 63, not 255. The render path still divides
/// by 255, so the endpoint can never reach full brightness.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn brightness_from_percent(percent: u8) -> u8 {
    (percent as u16 * 63 / 100) as u8
}
