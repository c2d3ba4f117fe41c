use crate::color::Color;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// A 2D drawing target with the primitives the games need.
///
/// Coordinates are in logical pixels with the origin at the top left. For
/// `fill_text`, `(x, y)` is the left end of the text baseline, as with the
/// canvas 2D `fillText`.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn fill_text(&mut self, text: &str, x: i32, y: i32, color: Color);
}

/// Pixel size of one font dot when drawing text into a `FrameBuffer`.
pub const TEXT_SCALE: usize = 2;

/// Borrowed RGB24 pixel buffer, the layout the SDL frontend uploads.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 3);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let index = (y * self.width + x) * 3;
        Color::new_rgb(
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        )
    }

    #[inline]
    fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = (y * self.width + x) * 3;
        self.pixels[index] = color.r;
        self.pixels[index + 1] = color.g;
        self.pixels[index + 2] = color.b;
    }
}

impl Surface for FrameBuffer<'_> {
    fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(3) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        // Clip to the buffer; fully off-screen rects draw nothing.
        let x0 = x.clamp(0, self.width as i32) as usize;
        let y0 = y.clamp(0, self.height as i32) as usize;
        let x1 = x.saturating_add(width).clamp(0, self.width as i32) as usize;
        let y1 = y.saturating_add(height).clamp(0, self.height as i32) as usize;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put_pixel(px, py, color);
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let dot = TEXT_SCALE as i32;
        let top = y - (GLYPH_HEIGHT as i32) * dot;
        let mut pen_x = x;
        for ch in text.chars() {
            match font::glyph(ch) {
                Some(rows) => {
                    for row in 0..GLYPH_HEIGHT {
                        for col in 0..GLYPH_WIDTH {
                            if font::is_set(&rows, col, row) {
                                self.fill_rect(
                                    pen_x + col as i32 * dot,
                                    top + row as i32 * dot,
                                    dot,
                                    dot,
                                    color,
                                );
                            }
                        }
                    }
                }
                None => log::trace!("no glyph for {:?}", ch),
            }
            pen_x += (GLYPH_WIDTH as i32 + 1) * dot;
        }
    }
}
