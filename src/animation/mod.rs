//! Per-mode frame generation
//!
//! Each mode implements [`Animation`]. The engine keeps one instance of every
//! mode alive at once so phase counters survive mode switches: leaving the
//! rainbow and coming back later resumes at the hue it stopped on.

mod checkerboard;
mod gradient;
mod rainbow;
mod random;
mod static_frame;

pub use checkerboard::CheckerboardAnimation;
pub use gradient::GradientAnimation;
pub use rainbow::RainbowAnimation;
pub use random::RandomAnimation;
pub use static_frame::StaticAnimation;

use crate::RandomSource;
use crate::color::BLACK;
use crate::config::PIXEL_COUNT;
use crate::frame_buffer::Frame;
use crate::state::{DisplayMode, DisplaySnapshot};

pub trait Animation {
    /// Render a single frame
    fn render(&mut self, input: &DisplaySnapshot, frame: &mut Frame);

    /// Reset animation state
    fn reset(&mut self) {}
}

/// Current phase counters, for observation only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationPhase {
    /// Rainbow hue offset in degrees, `[0, 360)`
    pub hue_offset: f32,
    /// Gradient column offset, `[0, MATRIX_COLS)`
    pub gradient_offset: usize,
}

/// Produces the next frame for whatever mode the snapshot selects
pub struct AnimationEngine<R: RandomSource> {
    static_frame: StaticAnimation,
    rainbow: RainbowAnimation,
    checkerboard: CheckerboardAnimation,
    gradient: GradientAnimation,
    random: RandomAnimation<R>,
}

impl<R: RandomSource> AnimationEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            static_frame: StaticAnimation,
            rainbow: RainbowAnimation::new(),
            checkerboard: CheckerboardAnimation,
            gradient: GradientAnimation::new(),
            random: RandomAnimation::new(rng),
        }
    }

    /// Compute the next frame and advance the active mode's phase
    pub fn next_frame(&mut self, input: &DisplaySnapshot) -> Frame {
        let mut frame = [BLACK; PIXEL_COUNT];
        self.render(input, &mut frame);
        frame
    }

    fn render(&mut self, input: &DisplaySnapshot, frame: &mut Frame) {
        match input.state.mode {
            DisplayMode::Static => self.static_frame.render(input, frame),
            DisplayMode::Rainbow => self.rainbow.render(input, frame),
            DisplayMode::Checkerboard => self.checkerboard.render(input, frame),
            DisplayMode::Gradient => self.gradient.render(input, frame),
            DisplayMode::Random => self.random.render(input, frame),
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        AnimationPhase {
            hue_offset: self.rainbow.hue_offset(),
            gradient_offset: self.gradient.offset(),
        }
    }

    /// Reset every mode's phase
    pub fn reset(&mut self) {
        self.static_frame.reset();
        self.rainbow.reset();
        self.checkerboard.reset();
        self.gradient.reset();
        self.random.reset();
    }
}
