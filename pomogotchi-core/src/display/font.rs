//! Fixed bitmap font
//!
//! Glyphs cover `'0'..='Z'` in ASCII order. Each is a classic 5x7 matrix
//! scaled 2x into a 16x16 cell, expanded at compile time.

use super::{GLYPH_HEIGHT, GLYPH_WIDTH_BYTES, WHITE};

/// Bytes per glyph cell
pub const GLYPH_BYTES: usize = GLYPH_WIDTH_BYTES * GLYPH_HEIGHT;

/// One rendered glyph cell, row-major, panel polarity
pub type Glyph = [u8; GLYPH_BYTES];

/// First character in the table
const FIRST: u8 = b'0';

/// Number of glyphs in the table (`'0'..='Z'`)
const GLYPH_COUNT: usize = (b'Z' - b'0' + 1) as usize;

/// Scale factor from the 5x7 source matrix
const SCALE: usize = 2;

/// Left margin of the scaled matrix inside the cell
const X_OFFSET: usize = 3;

/// Top margin of the scaled matrix inside the cell
const Y_OFFSET: usize = 1;

/// A cell with no ink, used to erase text
pub const BLANK: Glyph = [WHITE; GLYPH_BYTES];

/// 5x7 source matrices, bit 4 is the leftmost column
const FONT_5X7: [[u8; 7]; GLYPH_COUNT] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08], // ;
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // <
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // =
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // >
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // ?
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E], // @
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// Rendered glyph table
static GLYPHS: [Glyph; GLYPH_COUNT] = build_table();

const fn build_table() -> [Glyph; GLYPH_COUNT] {
    let mut table = [BLANK; GLYPH_COUNT];
    let mut i = 0;
    while i < GLYPH_COUNT {
        table[i] = expand(&FONT_5X7[i]);
        i += 1;
    }
    table
}

const fn expand(matrix: &[u8; 7]) -> Glyph {
    let mut cell = BLANK;
    let mut y = 0;
    while y < 7 * SCALE {
        let source_row = matrix[y / SCALE];
        let mut x = 0;
        while x < 5 * SCALE {
            if source_row & (0x10 >> (x / SCALE)) != 0 {
                let px = X_OFFSET + x;
                let index = (Y_OFFSET + y) * GLYPH_WIDTH_BYTES + px / 8;
                cell[index] &= !(0x80 >> (px % 8));
            }
            x += 1;
        }
        y += 1;
    }
    cell
}

/// Look up the glyph for a character
///
/// Lowercase letters map to their uppercase glyph. Returns `None` for
/// characters without a glyph, which callers render as empty cells.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let c = c.to_ascii_uppercase();
    if !c.is_ascii() {
        return None;
    }
    let code = c as u8;
    if code < FIRST {
        return None;
    }
    GLYPHS.get((code - FIRST) as usize)
}
