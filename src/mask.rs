//! Per-pixel uniform draws that decide where salt and pepper land.

use rand::Rng;

use crate::error::{ErrorKind, NoiseError};
use crate::sp_err;
use crate::threshold::Threshold;

/// What a single draw turns its pixel into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Speck {
    Pepper,
    Salt,
    Untouched,
}

/// One draw in `[0, 1)` per spatial location, stored row-major.
///
/// The mask is two-dimensional on purpose: every channel of a pixel shares the
/// same draw, so a pixel is either fully replaced or left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseMask {
    width: u32,
    height: u32,
    draws: Vec<f64>,
}

impl NoiseMask {
    /// Draws `width * height` values from `rng`, row by row.
    pub fn random<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        let len = width as usize * height as usize;
        let draws = (0..len).map(|_| rng.random::<f64>()).collect();
        NoiseMask {
            width,
            height,
            draws,
        }
    }

    /// Builds a mask from precomputed row-major draws.
    pub fn from_draws(
        width: u32,
        height: u32,
        draws: impl IntoIterator<Item = f64>,
    ) -> Result<Self, NoiseError> {
        let draws: Vec<f64> = draws.into_iter().collect();
        let expected = width as usize * height as usize;
        if draws.len() != expected {
            return Err(sp_err!(
                ErrorKind::Read,
                "noise mask for {width}x{height} needs {expected} draws, got {}",
                draws.len()
            ));
        }
        Ok(NoiseMask {
            width,
            height,
            draws,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The draw at column `x`, row `y`, or `None` outside the mask.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.draw(x, y))
        } else {
            None
        }
    }

    /// Unchecked counterpart of [`NoiseMask::get`]; panics outside the mask.
    pub(crate) fn draw(&self, x: u32, y: u32) -> f64 {
        self.draws[y as usize * self.width as usize + x as usize]
    }

    pub fn draws(&self) -> &[f64] {
        &self.draws
    }
}

/// Salt is checked last-wins: where both tails overlap (threshold above 0.5)
/// the pixel ends up white.
#[inline]
pub fn classify(draw: f64, threshold: Threshold) -> Speck {
    if draw > threshold.salt_above() {
        Speck::Salt
    } else if draw < threshold.pepper_below() {
        Speck::Pepper
    } else {
        Speck::Untouched
    }
}
