//! Tiny 4x6 bitmap font for the HUD and phase overlays
//!
//! Glyph rows pack four columns into the high nibble. Only the characters
//! the game actually prints are defined; everything else renders blank.

use super::frame::{Color, Frame};

/// Horizontal advance per character, before scaling
const ADVANCE: i32 = 5;

fn glyph_4x6(ch: char) -> [u8; 6] {
    match ch {
        'A' => [
            0b0100_0000, 0b1010_0000, 0b1110_0000, 0b1010_0000, 0b1010_0000, 0,
        ],
        'C' => [
            0b0110_0000, 0b1000_0000, 0b1000_0000, 0b1000_0000, 0b0110_0000, 0,
        ],
        'E' => [
            0b1110_0000, 0b1000_0000, 0b1100_0000, 0b1000_0000, 0b1110_0000, 0,
        ],
        'G' => [
            0b0110_0000, 0b1000_0000, 0b1010_0000, 0b1010_0000, 0b0110_0000, 0,
        ],
        'I' => [
            0b1110_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b1110_0000, 0,
        ],
        'M' => [
            0b1001_0000, 0b1111_0000, 0b1111_0000, 0b1001_0000, 0b1001_0000, 0,
        ],
        'N' => [
            0b1001_0000, 0b1101_0000, 0b1011_0000, 0b1001_0000, 0b1001_0000, 0,
        ],
        'O' => [
            0b0100_0000, 0b1010_0000, 0b1010_0000, 0b1010_0000, 0b0100_0000, 0,
        ],
        'R' => [
            0b1100_0000, 0b1010_0000, 0b1100_0000, 0b1010_0000, 0b1010_0000, 0,
        ],
        'S' => [
            0b0110_0000, 0b1000_0000, 0b0100_0000, 0b0010_0000, 0b1100_0000, 0,
        ],
        'U' => [
            0b1010_0000, 0b1010_0000, 0b1010_0000, 0b1010_0000, 0b1110_0000, 0,
        ],
        'V' => [
            0b1010_0000, 0b1010_0000, 0b1010_0000, 0b1010_0000, 0b0100_0000, 0,
        ],
        'W' => [
            0b1001_0000, 0b1001_0000, 0b1001_0000, 0b1111_0000, 0b0110_0000, 0,
        ],
        'Y' => [
            0b1010_0000, 0b1010_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0,
        ],
        '0' => [
            0b0100_0000, 0b1010_0000, 0b1010_0000, 0b1010_0000, 0b0100_0000, 0,
        ],
        '1' => [
            0b0100_0000, 0b1100_0000, 0b0100_0000, 0b0100_0000, 0b1110_0000, 0,
        ],
        '2' => [
            0b1100_0000, 0b0010_0000, 0b0100_0000, 0b1000_0000, 0b1110_0000, 0,
        ],
        '3' => [
            0b1100_0000, 0b0010_0000, 0b0100_0000, 0b0010_0000, 0b1100_0000, 0,
        ],
        '4' => [
            0b1010_0000, 0b1010_0000, 0b1110_0000, 0b0010_0000, 0b0010_0000, 0,
        ],
        '5' => [
            0b1110_0000, 0b1000_0000, 0b1100_0000, 0b0010_0000, 0b1100_0000, 0,
        ],
        '6' => [
            0b0110_0000, 0b1000_0000, 0b1100_0000, 0b1010_0000, 0b0100_0000, 0,
        ],
        '7' => [
            0b1110_0000, 0b0010_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0,
        ],
        '8' => [
            0b0100_0000, 0b1010_0000, 0b0100_0000, 0b1010_0000, 0b0100_0000, 0,
        ],
        '9' => [
            0b0100_0000, 0b1010_0000, 0b0110_0000, 0b0010_0000, 0b1100_0000, 0,
        ],
        '!' => [
            0b0100_0000, 0b0100_0000, 0b0100_0000, 0, 0b0100_0000, 0,
        ],
        _ => [0; 6],
    }
}

/// Draw `text` with its top-left corner at (x, y), scaled by `scale`
pub fn draw_text(frame: &mut Frame, x: i32, y: i32, text: &str, color: Color, scale: i32) {
    let s = scale.max(1);
    let mut cursor_x = x;

    for ch in text.chars() {
        let rows = glyph_4x6(ch.to_ascii_uppercase());
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..4 {
                if (bits >> (7 - col)) & 1 == 1 {
                    frame.fill_rect(cursor_x + col * s, y + row as i32 * s, s, s, color);
                }
            }
        }
        cursor_x += ADVANCE * s;
    }
}

/// Pixel width of `text` at `scale`, for centering
pub fn text_width(text: &str, scale: i32) -> i32 {
    let s = scale.max(1);
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { n * ADVANCE * s - s }
}
