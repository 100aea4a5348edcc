//! Twinkle animation engine
//!
//! Owns one [`Pixel`] per LED and produces a full HSV frame per call. Every
//! frame a single random pixel is reconsidered for a state change, while all
//! pixels are advanced and re-colored from the live parameters.

use rand::Rng;

use crate::color::Hsv;
use crate::params::TwinkleParams;
use crate::pixel::Pixel;

/// Twinkle engine for a strip of `N` pixels
pub struct TwinkleEngine<const N: usize, R: Rng> {
    pixels: [Pixel; N],
    frame: [Hsv; N],
    rng: R,
}

impl<const N: usize, R: Rng> TwinkleEngine<N, R> {
    /// Create an engine with every pixel resting at the floor
    pub fn new(params: &TwinkleParams, rng: R) -> Self {
        Self {
            pixels: [Pixel::new(params.floor); N],
            frame: [params.color(params.floor); N],
            rng,
        }
    }

    /// Advance the animation by one frame and return the colors to render
    pub fn advance_frame(&mut self, params: &TwinkleParams) -> &[Hsv] {
        if N == 0 {
            return &self.frame;
        }
        let trigger = self.rng.random_range(0..N);
        self.advance_frame_with(trigger, params)
    }

    /// Advance the animation using a caller-chosen trigger pixel
    ///
    /// A trigger outside the strip leaves every state untouched and only
    /// advances pixels already in motion.
    pub fn advance_frame_with(&mut self, trigger: usize, params: &TwinkleParams) -> &[Hsv] {
        let range = params.brightness_range();

        if let Some(pixel) = self.pixels.get_mut(trigger) {
            pixel.trigger(range, &mut self.rng);
        }

        for (pixel, color) in self.pixels.iter_mut().zip(self.frame.iter_mut()) {
            pixel.update(range);
            *color = params.color(pixel.current());
        }

        &self.frame
    }

    /// Return every pixel to rest at the current floor
    pub fn reset(&mut self, params: &TwinkleParams) {
        for (pixel, color) in self.pixels.iter_mut().zip(self.frame.iter_mut()) {
            pixel.reset(params.floor);
            *color = params.color(params.floor);
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixel(&self, index: usize) -> Option<&Pixel> {
        self.pixels.get(index)
    }

    /// Colors produced by the last frame
    pub fn frame(&self) -> &[Hsv] {
        &self.frame
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
