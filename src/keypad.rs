//! Keypad symbols and the input source abstraction
//!
//! The intake only depends on symbol identity. Matrix wiring is left to the
//! [`KeySource`] implementation, which can use [`Key::from_matrix`] to decode
//! a scanned row/column pair.

pub const KEYPAD_ROWS: usize = 4;
pub const KEYPAD_COLUMNS: usize = 4;

/// Symbol layout of the 4x4 membrane keypad
pub const KEYMAP: [[char; KEYPAD_COLUMNS]; KEYPAD_ROWS] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// One of the 16 keypad symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Decimal digit, `0..=9`
    Digit(u8),
    A,
    B,
    C,
    D,
    /// `*`, clears the number being entered
    Star,
    /// `#`, terminates number entry
    Hash,
}

impl Key {
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            'A' => Self::A,
            'B' => Self::B,
            'C' => Self::C,
            'D' => Self::D,
            '*' => Self::Star,
            '#' => Self::Hash,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Digit(digit) if digit < 10 => (b'0' + digit) as char,
            Self::Digit(_) => '?',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::Star => '*',
            Self::Hash => '#',
        }
    }

    /// Decode a scanned matrix position
    pub fn from_matrix(row: usize, column: usize) -> Option<Self> {
        let c = *KEYMAP.get(row)?.get(column)?;
        Self::from_char(c)
    }
}

/// Non-blocking source of key presses
pub trait KeySource {
    /// Return the next pressed key, if any
    fn poll(&mut self) -> Option<Key>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn poll(&mut self) -> Option<Key> {
        (**self).poll()
    }
}
