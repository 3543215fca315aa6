//! Logical pixel grid drawn by the static mode
//!
//! The grid is row-major and fixed at [`MATRIX_ROWS`] x [`MATRIX_COLS`].
//! Every coordinate-taking operation is bounds checked; a rejected call leaves
//! the grid untouched.

use crate::color::{BLACK, Rgb};
use crate::config::{MATRIX_COLS, MATRIX_ROWS, PIXEL_COUNT};
use crate::error::Error;

/// One complete 64-pixel color assignment, in strip order
pub type Frame = [Rgb; PIXEL_COUNT];

/// A pixel and its coordinate, as reported to pollers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelEntry {
    pub row: usize,
    pub col: usize,
    pub color: Rgb,
}

/// Requested change of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelUpdate {
    pub row: usize,
    pub col: usize,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[Rgb; MATRIX_COLS]; MATRIX_ROWS],
}

impl FrameBuffer {
    /// Create a zeroed frame buffer
    pub const fn new() -> Self {
        Self {
            pixels: [[BLACK; MATRIX_COLS]; MATRIX_ROWS],
        }
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, color: Rgb) -> Result<(), Error> {
        let pixel = self
            .pixels
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(Error::OutOfRange { row, col })?;
        *pixel = color;
        Ok(())
    }

    pub fn get_pixel(&self, row: usize, col: usize) -> Result<Rgb, Error> {
        self.pixels
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(Error::OutOfRange { row, col })
    }

    /// Apply a batch of updates
    ///
    /// Either every update is applied or, if any coordinate is out of range,
    /// none is.
    pub fn apply(&mut self, updates: &[PixelUpdate]) -> Result<(), Error> {
        if let Some(invalid) = updates
            .iter()
            .find(|update| !contains(update.row, update.col))
        {
            return Err(Error::OutOfRange {
                row: invalid.row,
                col: invalid.col,
            });
        }
        for update in updates {
            self.set_pixel(update.row, update.col, update.color)?;
        }
        Ok(())
    }

    pub fn fill(&mut self, color: Rgb) {
        for cells in &mut self.pixels {
            cells.fill(color);
        }
    }

    /// Snapshot of all pixels with their coordinates, row-major
    pub fn get_all(&self) -> [PixelEntry; PIXEL_COUNT] {
        core::array::from_fn(|index| {
            let (row, col) = (index / MATRIX_COLS, index % MATRIX_COLS);
            PixelEntry {
                row,
                col,
                color: self.pixels[row][col],
            }
        })
    }

    /// Flatten the grid into strip order
    pub fn frame(&self) -> Frame {
        core::array::from_fn(|index| self.pixels[index / MATRIX_COLS][index % MATRIX_COLS])
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a coordinate lies inside the matrix
pub const fn contains(row: usize, col: usize) -> bool {
    row < MATRIX_ROWS && col < MATRIX_COLS
}
