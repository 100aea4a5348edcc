//! Color correction filter
//!
//! Applies multiplicative color correction to each RGB channel, compensating
//! for the uneven channel intensity of common LED strips.

use super::Filter;
use crate::color::Rgb;
use crate::math8::scale8;

/// Correction factors of a typical WS2812 strip (`0xFFB0F0`)
pub const TYPICAL_LED_STRIP: Rgb = Rgb {
    r: 255,
    g: 176,
    b: 240,
};

/// Factors that leave colors unchanged
pub const UNCORRECTED: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Per-channel multiplicative color correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl ColorCorrection {
    pub const fn new(factors: Rgb) -> Self {
        Self { factors }
    }

    pub const fn factors(self) -> Rgb {
        self.factors
    }

    /// Check if correction is active
    pub const fn is_active(self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }
}

impl Default for ColorCorrection {
    fn default() -> Self {
        Self::new(UNCORRECTED)
    }
}

impl Filter for ColorCorrection {
    fn apply(&mut self, frame: &mut [Rgb]) {
        if !self.is_active() {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.factors.r);
            pixel.g = scale8(pixel.g, self.factors.g);
            pixel.b = scale8(pixel.b, self.factors.b);
        }
    }
}
