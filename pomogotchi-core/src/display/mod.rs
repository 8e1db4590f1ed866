//! Display buffer and its fixed content
//!
//! The 122x250 panel is split into two 125-row halves. The top half is the
//! text region (phase caption and the minutes-left line), rendered from a
//! fixed glyph table. The bottom half is the image region, always one of the
//! pre-rendered tamagotchi frames.
//!
//! Pixels are stored in panel polarity: a set bit is white, a clear bit is
//! ink.

pub mod buffer;
pub mod font;
pub mod images;

pub use buffer::{Cursor, DisplayBuffer, Snapshot};
pub use images::Tamagotchi;

/// Panel width in pixels
pub const PANEL_WIDTH: usize = 122;

/// Panel height in pixels
pub const PANEL_HEIGHT: usize = 250;

/// Bytes per pixel row (122 pixels padded to 128)
pub const ROW_BYTES: usize = PANEL_WIDTH / 8 + 1;

/// Pixel rows in each half of the panel
pub const HALF_ROWS: usize = PANEL_HEIGHT / 2;

/// Bytes in each half of the panel
pub const HALF_BYTES: usize = ROW_BYTES * HALF_ROWS;

/// Byte value of eight white pixels
pub const WHITE: u8 = 0xFF;

/// Glyph cell width in bytes
pub const GLYPH_WIDTH_BYTES: usize = 2;

/// Glyph cell height in pixel rows
pub const GLYPH_HEIGHT: usize = 16;

/// Character cells per text row
///
/// The last cell of the row is left empty as a right margin.
pub const CHARS_PER_ROW: usize = ROW_BYTES / GLYPH_WIDTH_BYTES - 1;

/// Text rows that fit in the text region
pub const TEXT_ROWS: usize = HALF_ROWS / GLYPH_HEIGHT;

/// Text row reserved for the minutes-left counter
pub const MINUTES_ROW: usize = 4;
