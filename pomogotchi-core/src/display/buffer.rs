//! Two-region display buffer
//!
//! The text region is owned memory drawn one glyph cell at a time. The image
//! region is a reference to one of the static tamagotchi frames, so swapping
//! the image is a pointer write.

use core::fmt::Write;

use heapless::String;

use super::font::{self, Glyph, BLANK};
use super::images::{Frame, Tamagotchi};
use super::{
    CHARS_PER_ROW, GLYPH_HEIGHT, GLYPH_WIDTH_BYTES, HALF_BYTES, HALF_ROWS, MINUTES_ROW,
    PANEL_WIDTH, ROW_BYTES, TEXT_ROWS, WHITE,
};

/// Largest value the minutes line can show
pub const MAX_MINUTES_SHOWN: u16 = 99;

/// Text cursor position in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Text row (0-based)
    pub row: u8,
    /// Character column (0-based)
    pub col: u8,
}

impl Cursor {
    /// Top-left cell
    pub const ORIGIN: Cursor = Cursor { row: 0, col: 0 };
}

/// In-memory image of the whole panel
#[derive(Clone)]
pub struct DisplayBuffer {
    /// Text region pixels
    text: [u8; HALF_BYTES],
    /// Image region content
    image: Tamagotchi,
    /// Next cell `draw_string` writes to
    cursor: Cursor,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Create a blank buffer showing no tamagotchi
    pub const fn new() -> Self {
        Self {
            text: [WHITE; HALF_BYTES],
            image: Tamagotchi::Empty,
            cursor: Cursor::ORIGIN,
        }
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Tamagotchi currently in the image region
    pub fn image(&self) -> Tamagotchi {
        self.image
    }

    /// Select the tamagotchi for the image region
    pub fn set_image(&mut self, image: Tamagotchi) {
        self.image = image;
    }

    /// Erase the caption rows and return the cursor to the origin
    ///
    /// Every cell is overwritten with the blank glyph rather than zeroing
    /// memory, so only pixels inside glyph cells are touched. The minutes
    /// line is left alone; see [`clear_minutes_line`](Self::clear_minutes_line).
    pub fn clear_text(&mut self) {
        self.cursor = Cursor::ORIGIN;
        for row in (0..TEXT_ROWS).filter(|&row| row != MINUTES_ROW) {
            self.blank_row(row);
        }
    }

    /// Erase the minutes-left line
    pub fn clear_minutes_line(&mut self) {
        self.blank_row(MINUTES_ROW);
    }

    /// Draw a string at the cursor
    ///
    /// Characters go left to right and wrap to the next row when the row is
    /// full. Spaces (and characters without a glyph) advance the cursor
    /// without touching pixels. Afterwards the cursor always moves to the
    /// start of the next row, so a string that exactly fills a row leaves the
    /// row after it empty.
    pub fn draw_string(&mut self, text: &str) {
        for c in text.chars() {
            if let Some(glyph) = font::glyph(c) {
                self.blit(self.cursor.row as usize, self.cursor.col as usize, glyph);
            }
            self.advance();
        }

        self.newline();
    }

    /// Draw `" N MIN"` on the minutes line
    ///
    /// Independent of the text cursor. Values above [`MAX_MINUTES_SHOWN`]
    /// are clamped so the line always fits one row.
    pub fn draw_minutes_left(&mut self, minutes: u16) {
        let mut line: String<CHARS_PER_ROW> = String::new();
        // Fits: " 99 MIN" is exactly CHARS_PER_ROW characters
        let _ = write!(line, " {} MIN", minutes.min(MAX_MINUTES_SHOWN));

        for (col, c) in line.chars().enumerate() {
            if let Some(glyph) = font::glyph(c) {
                self.blit(MINUTES_ROW, col, glyph);
            }
        }
    }

    /// Read-only view of the buffer for the transport
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            text: &self.text,
            image: self.image.frame(),
        }
    }

    fn blank_row(&mut self, row: usize) {
        for col in 0..CHARS_PER_ROW {
            self.blit(row, col, &BLANK);
        }
    }

    fn advance(&mut self) {
        self.cursor.col += 1;
        if self.cursor.col as usize >= CHARS_PER_ROW {
            self.newline();
        }
    }

    fn newline(&mut self) {
        self.cursor.col = 0;
        self.cursor.row = ((self.cursor.row as usize + 1) % TEXT_ROWS) as u8;
    }

    /// Copy a glyph into a text cell
    ///
    /// The row wraps and out-of-range columns are dropped, so no write can
    /// land outside the text region.
    fn blit(&mut self, row: usize, col: usize, glyph: &Glyph) {
        if col >= CHARS_PER_ROW {
            return;
        }
        let row = row % TEXT_ROWS;
        let cell_origin = row * GLYPH_HEIGHT * ROW_BYTES + col * GLYPH_WIDTH_BYTES;

        for (y, line) in glyph.chunks_exact(GLYPH_WIDTH_BYTES).enumerate() {
            let start = cell_origin + y * ROW_BYTES;
            self.text[start..start + GLYPH_WIDTH_BYTES].copy_from_slice(line);
        }
    }
}

/// Borrowed view of a [`DisplayBuffer`] ready to send to the panel
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    text: &'a [u8; HALF_BYTES],
    image: &'static Frame,
}

impl<'a> Snapshot<'a> {
    /// Text region bytes (top half of the panel)
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Image region bytes (bottom half of the panel)
    pub fn image(&self) -> &'static [u8] {
        self.image
    }

    /// Panel rows in transfer order: all text rows, then all image rows
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.text
            .chunks_exact(ROW_BYTES)
            .chain(self.image.chunks_exact(ROW_BYTES))
    }

    /// Check if the pixel at (`x`, `y`) is ink
    ///
    /// `y` counts from the top of the panel across both halves.
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        if x >= PANEL_WIDTH {
            return false;
        }
        let (bytes, y) = if y < HALF_ROWS {
            (&self.text[..], y)
        } else {
            (&self.image[..], y - HALF_ROWS)
        };
        bytes
            .get(y * ROW_BYTES + x / 8)
            .map(|b| b & (0x80 >> (x % 8)) == 0)
            .unwrap_or(false)
    }
}
