#![allow(dead_code)]

use matrix_composer::renderer::WireFrame;
use matrix_composer::{PIXEL_COUNT, RandomSource, StripDriver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripError;

/// Strip double that records every latched frame
#[derive(Debug)]
pub struct RecordingStrip {
    staged: WireFrame,
    pub submitted: usize,
    pub frames: Vec<WireFrame>,
    pub failing_pixel: Option<usize>,
    pub fail_refresh: bool,
}

impl RecordingStrip {
    pub fn new() -> Self {
        Self {
            staged: [(0, 0, 0); PIXEL_COUNT],
            submitted: 0,
            frames: Vec::new(),
            failing_pixel: None,
            fail_refresh: false,
        }
    }
}

impl StripDriver for RecordingStrip {
    type Error = StripError;

    fn set_pixel(&mut self, index: usize, c1: u8, c2: u8, c3: u8) -> Result<(), StripError> {
        if self.failing_pixel == Some(index) {
            return Err(StripError);
        }
        self.staged[index] = (c1, c2, c3);
        self.submitted += 1;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), StripError> {
        if self.fail_refresh {
            return Err(StripError);
        }
        self.frames.push(self.staged);
        Ok(())
    }
}

/// Deterministic xorshift generator
#[derive(Debug, Clone)]
pub struct XorShift(pub u32);

impl RandomSource for XorShift {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}
