//! Keypad configuration intake
//!
//! Reads bounded decimal numbers from a [`KeySource`], echoing digits to a
//! [`TextDisplay`], and routes the four letter keys to parameter setters.
//!
//! Entry is synchronous: [`read_bounded_integer`] blocks until `#` is
//! pressed, and the animation pauses meanwhile. [`NumberEntry`] holds the
//! accumulator on its own so it can also be fed one key per frame.

use heapless::String;

use crate::display::{DISPLAY_COLUMNS, TextDisplay};
use crate::keypad::{Key, KeySource};
use crate::params::{Parameter, TwinkleParams};

/// Largest value a number entry can hold
pub const MAX_ENTRY_VALUE: u8 = 255;

/// Display row used to echo typed digits
pub const ENTRY_ROW: u8 = 1;

/// Hint shown when a key without a setter is pressed
pub const USAGE_HINT: &str = "Select A B C D";

/// In-progress decimal number typed on the keypad
#[derive(Debug, Clone, Default)]
pub struct NumberEntry {
    value: u16,
    digits: String<DISPLAY_COLUMNS>,
}

impl NumberEntry {
    pub const fn new() -> Self {
        Self {
            value: 0,
            digits: String::new(),
        }
    }

    /// Value accumulated so far
    pub fn value(&self) -> u8 {
        u8::try_from(self.value).unwrap_or(MAX_ENTRY_VALUE)
    }

    /// Digits currently visible on the entry row
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Feed a single key
    ///
    /// Digits are echoed and accumulated. A value above [`MAX_ENTRY_VALUE`]
    /// is discarded together with the visible digits, as is everything on
    /// `*`. Returns the accumulated value once `#` is pressed and starts
    /// over; letter keys and out-of-range digits are ignored.
    pub fn feed<D: TextDisplay + ?Sized>(&mut self, key: Key, display: &mut D) -> Option<u8> {
        match key {
            Key::Digit(digit) if digit < 10 => {
                // Leading zeros past the row width are counted but not shown
                let c = key.as_char();
                if self.digits.push(c).is_ok() {
                    display.write_char(c);
                }
                self.value = self.value * 10 + u16::from(digit);
                if self.value > u16::from(MAX_ENTRY_VALUE) {
                    self.clear(display);
                }
                None
            }
            Key::Star => {
                self.clear(display);
                None
            }
            Key::Hash => {
                let value = self.value();
                self.value = 0;
                self.digits.clear();
                Some(value)
            }
            Key::Digit(_) | Key::A | Key::B | Key::C | Key::D => None,
        }
    }

    fn clear<D: TextDisplay + ?Sized>(&mut self, display: &mut D) {
        self.value = 0;
        self.digits.clear();
        display.clear_row(ENTRY_ROW);
    }
}

/// Read a number in `0..=255` from the keypad
///
/// Blocks until `#` is pressed. Digits are echoed on [`ENTRY_ROW`].
pub fn read_bounded_integer<K, D>(keys: &mut K, display: &mut D) -> u8
where
    K: KeySource + ?Sized,
    D: TextDisplay + ?Sized,
{
    display.set_cursor(0, ENTRY_ROW);
    let mut entry = NumberEntry::new();
    loop {
        let Some(key) = keys.poll() else {
            core::hint::spin_loop();
            continue;
        };
        if let Some(value) = entry.feed(key, display) {
            return value;
        }
    }
}

/// Outcome of a dispatched key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A parameter was set to a new value
    Set(Parameter, u8),
    /// The key has no setter; the usage hint was shown
    Usage,
}

/// Parameter edited by a dispatch key
pub const fn parameter_for_key(key: Key) -> Option<Parameter> {
    match key {
        Key::A => Some(Parameter::Hue),
        Key::B => Some(Parameter::Saturation),
        Key::C => Some(Parameter::Floor),
        Key::D => Some(Parameter::Ceiling),
        Key::Digit(_) | Key::Star | Key::Hash => None,
    }
}

/// Handle a key pressed outside of number entry
///
/// Letter keys prompt for a new value of their parameter and store it.
/// Any other key shows [`USAGE_HINT`] and changes nothing.
pub fn apply_key_command<K, D>(
    key: Key,
    keys: &mut K,
    display: &mut D,
    params: &mut TwinkleParams,
) -> Command
where
    K: KeySource + ?Sized,
    D: TextDisplay + ?Sized,
{
    let Some(parameter) = parameter_for_key(key) else {
        display.clear();
        display.write_str(USAGE_HINT);
        return Command::Usage;
    };

    display.clear();
    display.write_str(parameter.label());
    let value = read_bounded_integer(keys, display);
    params.set(parameter, value);
    display.clear();

    Command::Set(parameter, value)
}
