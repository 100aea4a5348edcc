//! Desktop preview app for myrtio-twinkle
//!
//! Runs the twinkle controller on a worker thread, the same way the firmware
//! main loop does, and mirrors the LED strip and the 16x2 display in a window.
//! Keys are entered with the on-screen keypad or the keyboard.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration as StdDuration, Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui;
use myrtio_twinkle::display::DISPLAY_ROWS;
use myrtio_twinkle::filter::UNCORRECTED;
use myrtio_twinkle::keypad::KEYMAP;
use myrtio_twinkle::{
    Instant, Key, KeySource, OutputDriver, Rgb, TextBuffer, TextDisplay, TwinkleConfig,
    TwinkleController, TwinkleParams,
};
use rand::{SeedableRng, rngs::SmallRng};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 50;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 14.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Size of a keypad button
const KEY_SIZE: f32 = 44.0;

/// Idle wait between keypad polls, so number entry does not spin a core
const KEY_POLL_IDLE: StdDuration = StdDuration::from_millis(1);

const LCD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(40, 70, 160);
const LCD_FOREGROUND: egui::Color32 = egui::Color32::from_rgb(230, 240, 255);

/// State published by the controller thread
#[derive(Default)]
struct Shared {
    strip: Vec<Rgb>,
    display: TextBuffer,
    params: TwinkleParams,
    frames: u64,
}

type SharedState = Arc<Mutex<Shared>>;

fn lock(shared: &SharedState) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Strip output that publishes every frame to the UI
struct StripOutput(SharedState);

impl OutputDriver for StripOutput {
    fn write(&mut self, colors: &[Rgb]) {
        let mut shared = lock(&self.0);
        shared.strip.clear();
        shared.strip.extend_from_slice(colors);
        shared.frames += 1;
    }
}

/// Character display backed by the shared text buffer
struct DisplayOutput(SharedState);

impl TextDisplay for DisplayOutput {
    fn clear(&mut self) {
        lock(&self.0).display.clear();
    }

    fn set_cursor(&mut self, column: u8, row: u8) {
        lock(&self.0).display.set_cursor(column, row);
    }

    fn write_char(&mut self, c: char) {
        lock(&self.0).display.write_char(c);
    }
}

/// Keypad fed by UI clicks and keyboard input
struct ChannelKeys(Receiver<Key>);

impl KeySource for ChannelKeys {
    fn poll(&mut self) -> Option<Key> {
        match self.0.try_recv() {
            Ok(key) => Some(key),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => {
                thread::sleep(KEY_POLL_IDLE);
                None
            }
        }
    }
}

fn elapsed_ms(start: StdInstant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn spawn_controller(shared: SharedState, keys: Receiver<Key>) {
    thread::spawn(move || {
        #[allow(clippy::cast_possible_truncation)]
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();

        // The window is not an LED strip, show the colors uncorrected
        let config = TwinkleConfig {
            color_correction: UNCORRECTED,
            ..TwinkleConfig::default()
        };

        let mut controller = TwinkleController::<_, _, _, _, LED_COUNT>::new(
            StripOutput(Arc::clone(&shared)),
            SmallRng::seed_from_u64(seed),
            ChannelKeys(keys),
            DisplayOutput(Arc::clone(&shared)),
            &config,
        );

        let start = StdInstant::now();
        loop {
            let result = controller.step(|| Instant::from_millis(elapsed_ms(start)));
            lock(&shared).params = *controller.params();
            thread::sleep(StdDuration::from_millis(result.sleep_duration.as_millis()));
        }
    });
}

fn main() -> eframe::Result<()> {
    let shared = SharedState::default();
    let (sender, receiver) = mpsc::channel();
    spawn_controller(Arc::clone(&shared), receiver);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 520.0])
            .with_title("Twinkle Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-twinkle-preview",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PreviewApp {
                shared,
                keys: sender,
            }))
        }),
    )
}

struct PreviewApp {
    /// State published by the controller thread
    shared: SharedState,
    /// Key presses for the controller thread
    keys: Sender<Key>,
}

impl PreviewApp {
    fn press(&self, c: char) {
        if let Some(key) = Key::from_char(c.to_ascii_uppercase()) {
            let _ = self.keys.send(key);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let typed: Vec<char> = ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => Some(text.chars()),
                    _ => None,
                })
                .flatten()
                .collect()
        });
        for c in typed {
            self.press(c);
        }

        let (strip, display, params, frames) = {
            let shared = lock(&self.shared);
            (
                shared.strip.clone(),
                shared.display.clone(),
                shared.params,
                shared.frames,
            )
        };

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Hue: {}", params.hue));
                ui.add_space(8.0);
                ui.label(format!("Saturation: {}", params.saturation));
                ui.add_space(8.0);
                ui.label(format!("Floor: {}", params.floor));
                ui.add_space(8.0);
                ui.label(format!("Ceiling: {}", params.ceiling));
                ui.add_space(8.0);
                ui.label(format!("Frames: {frames}"));
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = LED_SIZE + LED_GAP;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = strip.len().max(1).div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in strip.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }

            ui.add_space(24.0);

            ui.horizontal_top(|ui| {
                // === Character display ===
                egui::Frame::default()
                    .fill(LCD_BACKGROUND)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        for row in 0..DISPLAY_ROWS {
                            ui.label(
                                egui::RichText::new(display.row(row))
                                    .monospace()
                                    .size(20.0)
                                    .color(LCD_FOREGROUND),
                            );
                        }
                    });

                ui.add_space(32.0);

                // === Keypad ===
                egui::Grid::new("keypad")
                    .spacing([4.0, 4.0])
                    .show(ui, |ui| {
                        for row in KEYMAP {
                            for c in row {
                                let button = egui::Button::new(c.to_string());
                                if ui.add_sized([KEY_SIZE, KEY_SIZE], button).clicked() {
                                    self.press(c);
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(16.0);
            ui.label("A: hue  B: saturation  C: floor  D: ceiling  *: clear  #: confirm");
        });
    }
}
