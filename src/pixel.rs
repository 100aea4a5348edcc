//! Per-pixel twinkle state machine
//!
//! Each pixel rests at the floor until it is picked as a frame's trigger,
//! then brightens toward a random peak, holds there until triggered again and
//! dims back to the floor.
//!
//! ```text
//! Resting --trigger--> Brightening --current >= target--> Peaked
//!    ^                                                       |
//!    +------current <= floor------ Dimming <-----trigger-----+
//! ```

use rand::Rng;

use crate::params::BrightnessRange;

/// Largest per-frame brightness step of a twinkle
pub const MAX_STEP: u8 = 5;

/// Parameters of a single twinkle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excursion {
    target: u8,
    step: u8,
}

impl Excursion {
    /// A zero `step` is raised to 1
    pub const fn new(target: u8, step: u8) -> Self {
        let step = if step == 0 { 1 } else { step };
        Self { target, step }
    }

    /// Peak brightness
    pub const fn target(self) -> u8 {
        self.target
    }

    /// Brightness change per frame, at least 1
    pub const fn step(self) -> u8 {
        self.step
    }

    /// Draw a random excursion that peaks inside `range`
    pub fn random<R: Rng>(range: BrightnessRange, rng: &mut R) -> Self {
        let (low, high) = range.peak_bounds();
        Self::new(rng.random_range(low..=high), rng.random_range(1..=MAX_STEP))
    }
}

/// Animation state of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    /// Idle at the floor
    Resting,
    /// Rising toward the excursion target
    Brightening(Excursion),
    /// Holding at the target
    Peaked(Excursion),
    /// Falling back toward the floor
    Dimming(Excursion),
}

/// A single animated pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    state: PixelState,
    current: u8,
}

impl Pixel {
    /// Create a resting pixel at the given floor
    pub const fn new(floor: u8) -> Self {
        Self {
            state: PixelState::Resting,
            current: floor,
        }
    }

    pub const fn state(&self) -> PixelState {
        self.state
    }

    /// Brightness applied on the last frame
    pub const fn current(&self) -> u8 {
        self.current
    }

    pub const fn is_resting(&self) -> bool {
        matches!(self.state, PixelState::Resting)
    }

    /// Reconsider the pixel as the frame's trigger
    ///
    /// A resting pixel starts a random twinkle and a peaked pixel starts
    /// dimming. Pixels in motion are left alone. Returns whether the state
    /// changed.
    pub fn trigger<R: Rng>(&mut self, range: BrightnessRange, rng: &mut R) -> bool {
        match self.state {
            PixelState::Resting => self.ignite(Excursion::random(range, rng)),
            PixelState::Peaked(excursion) => {
                self.state = PixelState::Dimming(excursion);
                true
            }
            PixelState::Brightening(_) | PixelState::Dimming(_) => false,
        }
    }

    /// Start a twinkle with a known excursion
    ///
    /// Only resting pixels can be ignited.
    pub fn ignite(&mut self, excursion: Excursion) -> bool {
        if !self.is_resting() {
            return false;
        }
        self.state = PixelState::Brightening(excursion);
        true
    }

    /// Advance the pixel by one frame
    ///
    /// Target and current brightness are re-clamped against `range` on every
    /// call, since the floor and ceiling may change between frames.
    pub fn update(&mut self, range: BrightnessRange) {
        let floor = range.floor();
        let ceiling = range.ceiling();

        self.state = match self.state {
            PixelState::Resting => {
                self.current = floor;
                PixelState::Resting
            }
            PixelState::Brightening(mut excursion) => {
                excursion.target = excursion.target.min(ceiling);
                self.current = self
                    .current
                    .saturating_add(excursion.step)
                    .min(excursion.target);
                if self.current >= excursion.target {
                    PixelState::Peaked(excursion)
                } else {
                    PixelState::Brightening(excursion)
                }
            }
            PixelState::Peaked(mut excursion) => {
                excursion.target = excursion.target.min(ceiling);
                self.current = self.current.min(ceiling);
                PixelState::Peaked(excursion)
            }
            PixelState::Dimming(excursion) => {
                self.current = self.current.saturating_sub(excursion.step).max(floor);
                if self.current <= floor {
                    PixelState::Resting
                } else {
                    PixelState::Dimming(excursion)
                }
            }
        };

        self.current = range.clamp(self.current);
    }

    /// Drop any twinkle in progress and rest at `floor`
    pub const fn reset(&mut self, floor: u8) {
        self.state = PixelState::Resting;
        self.current = floor;
    }
}
