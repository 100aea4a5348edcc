//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use rand::Rng;

use crate::OutputDriver;
use crate::color::{Rgb, hsv_frame_to_rgb};
use crate::engine::TwinkleEngine;
use crate::filter::{ColorCorrection, Filter};
use crate::params::TwinkleParams;

/// Default target frame rate (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Number of frame periods we may fall behind before the schedule is reset.
///
/// If we fall behind by more than this, we skip the backlog instead of catching up.
pub const MAX_DRIFT_FRAMES: u64 = 2;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Advances the twinkle engine and converts its frame to RGB
/// - Writes the corrected frame to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now), &params);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, R: Rng, const N: usize> {
    output: O,
    engine: TwinkleEngine<N, R>,
    correction: ColorCorrection,
    buffer: [Rgb; N],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, R: Rng, const N: usize> FrameScheduler<O, R, N> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (30 FPS) for frame timing.
    pub fn new(engine: TwinkleEngine<N, R>, driver: O) -> Self {
        Self::with_frame_duration(engine, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: TwinkleEngine<N, R>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            correction: ColorCorrection::default(),
            buffer: [Rgb::default(); N],
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Apply per-channel color correction to every written frame.
    #[must_use]
    pub fn with_color_correction(mut self, factors: Rgb) -> Self {
        self.correction = ColorCorrection::new(factors);
        self
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances the engine by one frame
    /// 3. Writes the color-corrected frame to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant, params: &TwinkleParams) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls, e.g. keypad entry
        let max_drift_ms = self.frame_duration.as_millis() * MAX_DRIFT_FRAMES;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let colors = self.engine.advance_frame(params);
        hsv_frame_to_rgb(colors, &mut self.buffer);
        self.correction.apply(&mut self.buffer);
        self.output.write(&self.buffer);

        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &TwinkleEngine<N, R> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut TwinkleEngine<N, R> {
        &mut self.engine
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Last frame written to the output driver.
    pub fn buffer(&self) -> &[Rgb] {
        &self.buffer
    }
}
