//! Label bitmap rasterization.
//!
//! Renders a label string into an RGBA pixel buffer from the built-in
//! glyph set: white ink on a transparent background, so the sprite
//! material can tint it to the active theme color. The buffer becomes a
//! texture on a camera-facing quad.

use crate::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Pixels per font cell. 6 keeps the blocky look crisp after filtering.
const PIXEL_SCALE: u32 = 6;
/// Transparent border, in font cells, so linear filtering never clips ink.
const PADDING: u32 = 1;

/// A rasterized label, row-major from the top-left.
pub struct LabelBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

/// Rasterize `text` into a bitmap.
///
/// Empty input still produces a valid (fully transparent) one-cell image
/// so the caller never deals with zero-sized textures.
pub fn rasterize_label(text: &str) -> LabelBitmap {
    let glyph_count = text.chars().count().max(1) as u32;
    let width = (glyph_count * ADVANCE - 1 + 2 * PADDING) * PIXEL_SCALE;
    let height = (GLYPH_HEIGHT + 2 * PADDING) * PIXEL_SCALE;

    let mut pixels = vec![[0u8; 4]; (width * height) as usize];

    for (i, ch) in text.chars().enumerate() {
        let glyph = font::glyph(ch);
        let cell_x = PADDING + i as u32 * ADVANCE;
        for (row_idx, &row) in glyph.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if row & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let x0 = (cell_x + col) * PIXEL_SCALE;
                let y0 = (PADDING + row_idx as u32) * PIXEL_SCALE;
                for y in y0..y0 + PIXEL_SCALE {
                    for x in x0..x0 + PIXEL_SCALE {
                        pixels[(y * width + x) as usize] = [0xff, 0xff, 0xff, 0xff];
                    }
                }
            }
        }
    }

    LabelBitmap {
        width,
        height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink(bitmap: &LabelBitmap) -> usize {
        bitmap.pixels.iter().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn dimensions_scale_with_text_length() {
        let short = rasterize_label("A");
        let long = rasterize_label("CONTACT US");
        assert_eq!(short.height, long.height);
        assert!(long.width > short.width);
        assert_eq!(short.pixels.len(), (short.width * short.height) as usize);
    }

    #[test]
    fn letters_leave_ink_and_spaces_do_not() {
        assert!(ink(&rasterize_label("CLOTHING")) > 0);
        assert_eq!(ink(&rasterize_label("   ")), 0);
        assert_eq!(ink(&rasterize_label("")), 0);
    }

    #[test]
    fn ink_is_white_and_background_transparent() {
        let bitmap = rasterize_label("I");
        for pixel in &bitmap.pixels {
            if pixel[3] == 0 {
                continue;
            }
            assert_eq!(*pixel, [0xff, 0xff, 0xff, 0xff]);
        }
        // The padding border must stay clear.
        for x in 0..bitmap.width {
            assert_eq!(bitmap.pixels[x as usize][3], 0);
        }
    }
}
