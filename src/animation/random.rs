use super::Animation;
use crate::RandomSource;
use crate::color::Rgb;
use crate::frame_buffer::Frame;
use crate::state::DisplaySnapshot;

/// Independent uniformly random color for every pixel. No phase.
pub struct RandomAnimation<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> RandomAnimation<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> Animation for RandomAnimation<R> {
    fn render(&mut self, _input: &DisplaySnapshot, frame: &mut Frame) {
        for pixel in frame.iter_mut() {
            let [r, g, b, _] = self.rng.next_u32().to_le_bytes();
            *pixel = Rgb { r, g, b };
        }
    }
}
