//! Shows the frame buffer as drawn

use super::Animation;
use crate::frame_buffer::Frame;
use crate::state::DisplaySnapshot;

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAnimation;

impl Animation for StaticAnimation {
    fn render(&mut self, input: &DisplaySnapshot, frame: &mut Frame) {
        *frame = input.pixels;
    }
}
