use super::Animation;
use crate::config::MATRIX_COLS;
use crate::frame_buffer::Frame;
use crate::state::DisplaySnapshot;

/// Primary color on even cells, secondary on odd ones. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckerboardAnimation;

impl Animation for CheckerboardAnimation {
    fn render(&mut self, input: &DisplaySnapshot, frame: &mut Frame) {
        for (index, pixel) in frame.iter_mut().enumerate() {
            let (row, col) = (index / MATRIX_COLS, index % MATRIX_COLS);
            *pixel = if (row + col).is_multiple_of(2) {
                input.state.primary
            } else {
                input.state.secondary
            };
        }
    }
}
