//! A tiny 5x7 bitmap font for drawing text into a `FrameBuffer`.
//!
//! Each glyph is 7 rows; within a row bit 4 is the leftmost column. Lowercase
//! letters are drawn with their uppercase glyph.

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;

const DIGITS: [[u8; GLYPH_HEIGHT]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const BLANK: [u8; GLYPH_HEIGHT] = [0; GLYPH_HEIGHT];

/// Returns the rows for `ch`, or `None` if the font has no glyph for it.
pub fn glyph(ch: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match ch.to_ascii_uppercase() {
        d @ '0'..='9' => DIGITS[d as usize - '0' as usize],
        ' ' => BLANK,
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        _ => return None,
    };
    Some(rows)
}

#[inline]
pub fn is_set(rows: &[u8; GLYPH_HEIGHT], col: usize, row: usize) -> bool {
    (rows[row] >> (GLYPH_WIDTH - 1 - col)) & 0x1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_label_has_glyphs() {
        for ch in "Score: 0123456789".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {:?}", ch);
        }
    }

    #[test]
    fn glyph_rows_fit_in_width() {
        for ch in "SCORE: 0123456789".chars() {
            let rows = glyph(ch).unwrap();
            assert!(rows.iter().all(|row| *row < 1 << GLYPH_WIDTH));
        }
    }

    #[test]
    fn one_has_centered_stem() {
        let one = glyph('1').unwrap();
        assert!(is_set(&one, 2, 3));
        assert!(!is_set(&one, 0, 3));
        assert!(!is_set(&one, 4, 3));
    }

    #[test]
    fn unsupported_characters_have_no_glyph() {
        assert!(glyph('#').is_none());
        assert!(glyph('Z').is_none());
    }
}
