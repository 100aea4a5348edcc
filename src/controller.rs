//! Top-level twinkle controller
//!
//! Ties the keypad intake to the frame scheduler: every step polls the
//! keypad once, runs a setter if a key is waiting, then renders one frame.

use embassy_time::{Duration, Instant};
use rand::Rng;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::display::TextDisplay;
use crate::engine::TwinkleEngine;
use crate::filter::TYPICAL_LED_STRIP;
use crate::frame_scheduler::{DEFAULT_FRAME_DURATION, FrameResult, FrameScheduler};
use crate::intake::{Command, apply_key_command};
use crate::keypad::KeySource;
use crate::params::TwinkleParams;

/// Configuration for the twinkle controller
#[derive(Debug, Clone)]
pub struct TwinkleConfig {
    /// Initial tuning
    pub params: TwinkleParams,
    /// Per-channel correction of the LED strip
    pub color_correction: Rgb,
    pub frame_duration: Duration,
}

impl Default for TwinkleConfig {
    fn default() -> Self {
        Self {
            params: TwinkleParams::default(),
            color_correction: TYPICAL_LED_STRIP,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }
}

/// Twinkle controller - the main loop body
pub struct TwinkleController<O, R, K, D, const N: usize>
where
    O: OutputDriver,
    R: Rng,
    K: KeySource,
    D: TextDisplay,
{
    scheduler: FrameScheduler<O, R, N>,
    keys: K,
    display: D,
    params: TwinkleParams,
}

impl<O, R, K, D, const N: usize> TwinkleController<O, R, K, D, N>
where
    O: OutputDriver,
    R: Rng,
    K: KeySource,
    D: TextDisplay,
{
    /// One-time setup
    ///
    /// Clears the display and seeds every pixel at rest.
    pub fn new(driver: O, rng: R, keys: K, mut display: D, config: &TwinkleConfig) -> Self {
        display.clear();
        let engine = TwinkleEngine::new(&config.params, rng);
        let scheduler = FrameScheduler::with_frame_duration(engine, driver, config.frame_duration)
            .with_color_correction(config.color_correction);

        Self {
            scheduler,
            keys,
            display,
            params: config.params,
        }
    }

    /// Run one iteration of the main loop
    ///
    /// The clock is read after input handling, since a setter may block for
    /// as long as the operator takes to type a number.
    pub fn step<F: FnOnce() -> Instant>(&mut self, clock: F) -> FrameResult {
        self.poll_input();
        self.render(clock())
    }

    /// Poll the keypad once and dispatch a pressed key
    pub fn poll_input(&mut self) -> Option<Command> {
        let key = self.keys.poll()?;
        let command = apply_key_command(
            key,
            &mut self.keys,
            &mut self.display,
            &mut self.params,
        );

        #[cfg(feature = "esp32-log")]
        match command {
            Command::Set(parameter, value) => {
                println!("[TwinkleController.poll_input] {:?} set to {}", parameter, value);
            }
            Command::Usage => {
                println!("[TwinkleController.poll_input] no setter for key {:?}", key);
            }
        }

        Some(command)
    }

    /// Advance and render one frame
    pub fn render(&mut self, now: Instant) -> FrameResult {
        self.scheduler.tick(now, &self.params)
    }

    pub const fn params(&self) -> &TwinkleParams {
        &self.params
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn scheduler(&self) -> &FrameScheduler<O, R, N> {
        &self.scheduler
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }
}
