//! Runtime tuning parameters
//!
//! Four process-wide values read by every frame and written only by the
//! keypad intake. They are passed by reference into the engine, so a change
//! is picked up by the very next frame.

use crate::color::Hsv;

/// Minimum distance between the floor and a twinkle's peak
pub const MIN_EXCURSION: u8 = 16;

const DEFAULT_HUE: u8 = 31;
const DEFAULT_SATURATION: u8 = 195;
const DEFAULT_FLOOR: u8 = 20;
const DEFAULT_CEILING: u8 = 180;

const LABEL_HUE: &str = "Hue:";
const LABEL_SATURATION: &str = "Saturation:";
const LABEL_FLOOR: &str = "Brightness Low:";
const LABEL_CEILING: &str = "Brightness High:";

/// A single tunable parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Hue,
    Saturation,
    Floor,
    Ceiling,
}

impl Parameter {
    pub const ALL: [Self; 4] = [Self::Hue, Self::Saturation, Self::Floor, Self::Ceiling];

    /// Prompt shown on the display while the value is entered
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hue => LABEL_HUE,
            Self::Saturation => LABEL_SATURATION,
            Self::Floor => LABEL_FLOOR,
            Self::Ceiling => LABEL_CEILING,
        }
    }
}

/// Global tuning of the twinkle animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwinkleParams {
    pub hue: u8,
    pub saturation: u8,
    /// Resting brightness
    pub floor: u8,
    /// Maximum brightness a twinkle may reach
    pub ceiling: u8,
}

impl Default for TwinkleParams {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            floor: DEFAULT_FLOOR,
            ceiling: DEFAULT_CEILING,
        }
    }
}

impl TwinkleParams {
    pub const fn get(&self, parameter: Parameter) -> u8 {
        match parameter {
            Parameter::Hue => self.hue,
            Parameter::Saturation => self.saturation,
            Parameter::Floor => self.floor,
            Parameter::Ceiling => self.ceiling,
        }
    }

    pub const fn set(&mut self, parameter: Parameter, value: u8) {
        match parameter {
            Parameter::Hue => self.hue = value,
            Parameter::Saturation => self.saturation = value,
            Parameter::Floor => self.floor = value,
            Parameter::Ceiling => self.ceiling = value,
        }
    }

    /// Effective brightness range for the current floor and ceiling
    pub const fn brightness_range(&self) -> BrightnessRange {
        BrightnessRange::new(self.floor, self.ceiling)
    }

    /// Color of a pixel at the given brightness
    pub const fn color(&self, brightness: u8) -> Hsv {
        Hsv {
            hue: self.hue,
            sat: self.saturation,
            val: brightness,
        }
    }
}

/// Brightness bounds every pixel is clamped into
///
/// A ceiling below the floor is raised to the floor, so the range is never
/// empty and pixels glow steadily at the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRange {
    floor: u8,
    ceiling: u8,
}

impl BrightnessRange {
    pub const fn new(floor: u8, ceiling: u8) -> Self {
        let ceiling = if ceiling < floor { floor } else { ceiling };
        Self { floor, ceiling }
    }

    pub const fn floor(self) -> u8 {
        self.floor
    }

    pub const fn ceiling(self) -> u8 {
        self.ceiling
    }

    /// Clamp a brightness value into the range
    pub const fn clamp(self, value: u8) -> u8 {
        if value < self.floor {
            self.floor
        } else if value > self.ceiling {
            self.ceiling
        } else {
            value
        }
    }

    /// Inclusive bounds for a new twinkle's peak
    ///
    /// The lower bound sits [`MIN_EXCURSION`] above the floor, limited to the
    /// ceiling when the range is narrower than that.
    pub const fn peak_bounds(self) -> (u8, u8) {
        let low = self.floor.saturating_add(MIN_EXCURSION);
        if low > self.ceiling {
            (self.ceiling, self.ceiling)
        } else {
            (low, self.ceiling)
        }
    }
}
