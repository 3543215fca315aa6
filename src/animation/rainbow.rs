//! Hue sweep across the strip
//!
//! Pixel `i` gets hue `hue_offset + i * 360 / PIXEL_COUNT`. The offset moves
//! 2 degrees per frame, so the animation repeats every 180 frames.

use libm::fmodf;

use super::Animation;
use crate::color::hsv_to_rgb;
use crate::config::PIXEL_COUNT;
use crate::frame_buffer::Frame;
use crate::state::DisplaySnapshot;

const HUE_STEP: f32 = 2.0;
#[allow(clippy::cast_precision_loss)]
const HUE_SPACING: f32 = 360.0 / PIXEL_COUNT as f32;

#[derive(Debug, Clone, Default)]
pub struct RainbowAnimation {
    /// Degrees, `[0, 360)`
    hue_offset: f32,
}

impl RainbowAnimation {
    pub const fn new() -> Self {
        Self { hue_offset: 0.0 }
    }

    pub const fn hue_offset(&self) -> f32 {
        self.hue_offset
    }
}

impl Animation for RainbowAnimation {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, _input: &DisplaySnapshot, frame: &mut Frame) {
        for (index, pixel) in frame.iter_mut().enumerate() {
            let hue = fmodf(self.hue_offset + index as f32 * HUE_SPACING, 360.0);
            *pixel = hsv_to_rgb(hue, 1.0, 1.0);
        }

        self.hue_offset += HUE_STEP;
        if self.hue_offset >= 360.0 {
            self.hue_offset -= 360.0;
        }
    }

    fn reset(&mut self) {
        self.hue_offset = 0.0;
    }
}
