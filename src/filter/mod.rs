use crate::color::Rgb;

mod color_correction;

pub use color_correction::{ColorCorrection, TYPICAL_LED_STRIP, UNCORRECTED};

/// Post-processing applied to an RGB frame before it is written out
pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);
}
