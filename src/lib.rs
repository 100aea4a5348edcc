#![no_std]

pub mod color;
pub mod controller;
pub mod display;
pub mod engine;
pub mod filter;
pub mod frame_scheduler;
pub mod intake;
pub mod keypad;
pub mod math8;
pub mod params;
pub mod pixel;

pub use controller::{TwinkleConfig, TwinkleController};
pub use display::{TextBuffer, TextDisplay};
pub use engine::TwinkleEngine;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intake::{Command, NumberEntry, apply_key_command, read_bounded_integer};
pub use keypad::{Key, KeySource};
pub use params::{BrightnessRange, Parameter, TwinkleParams};
pub use pixel::{Excursion, Pixel, PixelState};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
