//! Horizontal primary-to-secondary blend scrolling one column per frame

use super::Animation;
use crate::color::blend;
use crate::config::MATRIX_COLS;
use crate::frame_buffer::Frame;
use crate::state::DisplaySnapshot;

#[allow(clippy::cast_precision_loss)]
const LAST_COL: f32 = (MATRIX_COLS - 1) as f32;

#[derive(Debug, Clone, Default)]
pub struct GradientAnimation {
    /// Column offset, `[0, MATRIX_COLS)`
    offset: usize,
}

impl GradientAnimation {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Animation for GradientAnimation {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, input: &DisplaySnapshot, frame: &mut Frame) {
        let primary = input.state.primary;
        let secondary = input.state.secondary;

        for (index, pixel) in frame.iter_mut().enumerate() {
            let col = index % MATRIX_COLS;
            let factor = ((col + self.offset) % MATRIX_COLS) as f32 / LAST_COL;
            *pixel = blend(primary, secondary, factor);
        }

        self.offset = (self.offset + 1) % MATRIX_COLS;
    }

    fn reset(&mut self) {
        self.offset = 0;
    }
}
