//! Character display abstraction
//!
//! Models a 16x2 character LCD. Only a handful of operations are needed to
//! echo prompts and typed digits.

pub const DISPLAY_COLUMNS: usize = 16;
pub const DISPLAY_ROWS: usize = 2;

/// A character surface with a cursor
pub trait TextDisplay {
    /// Blank the whole surface and home the cursor
    fn clear(&mut self);

    /// Move the cursor to `(column, row)`
    fn set_cursor(&mut self, column: u8, row: u8);

    /// Write a character at the cursor and advance it
    fn write_char(&mut self, c: char);

    /// Write a string at the cursor
    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }

    /// Blank a single row and park the cursor at its start
    fn clear_row(&mut self, row: u8) {
        self.set_cursor(0, row);
        for _ in 0..DISPLAY_COLUMNS {
            self.write_char(' ');
        }
        self.set_cursor(0, row);
    }
}

impl<D: TextDisplay + ?Sized> TextDisplay for &mut D {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn set_cursor(&mut self, column: u8, row: u8) {
        (**self).set_cursor(column, row);
    }

    fn write_char(&mut self, c: char) {
        (**self).write_char(c);
    }

    fn write_str(&mut self, s: &str) {
        (**self).write_str(s);
    }

    fn clear_row(&mut self, row: u8) {
        (**self).clear_row(row);
    }
}

/// In-memory 16x2 display
///
/// Characters written past the end of a row are dropped. Non-ASCII
/// characters are stored as `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    cells: [[u8; DISPLAY_COLUMNS]; DISPLAY_ROWS],
    column: usize,
    row: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; DISPLAY_COLUMNS]; DISPLAY_ROWS],
            column: 0,
            row: 0,
        }
    }

    /// Contents of a row, padded with spaces
    ///
    /// Returns an empty string for rows outside the display.
    pub fn row(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    /// Cursor position as `(column, row)`
    pub const fn cursor(&self) -> (usize, usize) {
        (self.column, self.row)
    }
}

impl TextDisplay for TextBuffer {
    fn clear(&mut self) {
        self.cells = [[b' '; DISPLAY_COLUMNS]; DISPLAY_ROWS];
        self.column = 0;
        self.row = 0;
    }

    fn set_cursor(&mut self, column: u8, row: u8) {
        self.column = usize::from(column);
        self.row = usize::from(row).min(DISPLAY_ROWS - 1);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write_char(&mut self, c: char) {
        let byte = if c.is_ascii() && !c.is_ascii_control() {
            c as u8
        } else {
            b'?'
        };
        if let Some(cell) = self
            .cells
            .get_mut(self.row)
            .and_then(|row| row.get_mut(self.column))
        {
            *cell = byte;
        }
        self.column = self.column.saturating_add(1);
    }
}
