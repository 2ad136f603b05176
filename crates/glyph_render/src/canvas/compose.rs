use super::ramp::Ramp;
use crate::font::raster::GlyphBitmap;

/// Row-major character buffer holding the composed output image.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize, cells: Vec<char>) -> Self {
        assert_eq!(width * height, cells.len());
        Self { width, height, cells }
    }

    fn empty() -> Self {
        Self { width: 0, height: 0, cells: Vec::new() }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// One `String` per pixel row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.width.max(1);
        self.cells.chunks(width).map(|row| row.iter().collect::<String>())
    }
}

/// Packs glyph bitmaps left-to-right into a single character canvas.
///
/// Each glyph lands at the cumulative offset of the widths seen so far
/// plus `padding` blank columns between neighbours, top-aligned at row
/// zero. Bearings are not consulted; shorter glyphs leave blank rows
/// underneath. Zero glyphs yield a 0x0 canvas.
pub fn compose(glyphs: &[GlyphBitmap], padding: usize, ramp: &Ramp) -> Canvas {
    if glyphs.is_empty() {
        return Canvas::empty();
    }

    // Sum of width + padding per glyph, minus the trailing padding.
    let total_width = glyphs.iter().map(|glyph| glyph.width + padding).sum::<usize>() - padding;
    let max_height = glyphs.iter().map(|glyph| glyph.height).max().unwrap_or(0);

    let mut cells = vec![ramp.blank(); total_width * max_height];
    let mut x_offset = 0;
    for glyph in glyphs {
        for y in 0..glyph.height {
            let row_start = y * total_width + x_offset;
            for x in 0..glyph.width {
                cells[row_start + x] = ramp.shade(glyph.sample(x, y));
            }
        }
        x_offset += glyph.width + padding;
    }

    Canvas::new(total_width, max_height, cells)
}

#[cfg(test)]
mod tests {
    use super::{compose, Canvas, Ramp};
    use crate::font::raster::GlyphBitmap;

    fn filled(width: usize, height: usize, coverage: u8) -> GlyphBitmap {
        GlyphBitmap {
            width,
            height,
            stride: width,
            left: 0,
            top: 0,
            buffer: vec![coverage; width * height],
        }
    }

    fn render(canvas: &Canvas) -> Vec<String> {
        canvas.rows().collect()
    }

    #[test]
    fn zero_glyphs_compose_to_empty_canvas() {
        let canvas = compose(&[], 2, &Ramp::shaded());
        assert_eq!(canvas.width(), 0);
        assert_eq!(canvas.height(), 0);
        assert_eq!(canvas.rows().count(), 0);
    }

    #[test]
    fn total_width_drops_the_trailing_padding() {
        let canvas = compose(&[filled(10, 4, 255), filled(8, 4, 255)], 2, &Ramp::shaded());
        assert_eq!(canvas.width(), 20);
        assert_eq!(canvas.height(), 4);
    }

    #[test]
    fn glyphs_are_top_aligned_with_blank_padding() {
        let tall = filled(2, 3, 255);
        let short = filled(1, 1, 255);
        let canvas = compose(&[tall, short], 2, &Ramp::shaded());

        assert_eq!(render(&canvas), vec![
            "@@  @", //
            "@@   ", //
            "@@   ", //
        ]);
    }

    #[test]
    fn pixels_go_through_the_ramp() {
        let glyph = GlyphBitmap {
            width: 2,
            height: 1,
            stride: 2,
            left: 0,
            top: 0,
            buffer: vec![0, 255],
        };
        let canvas = compose(&[glyph], 2, &Ramp::shaded());
        assert_eq!(render(&canvas), vec![" @"]);
    }

    #[test]
    fn rows_honor_the_bitmap_stride() {
        // Two visible columns inside four-byte rows; the tail bytes of
        // each row must never be sampled.
        let glyph = GlyphBitmap {
            width: 2,
            height: 2,
            stride: 4,
            left: 0,
            top: 0,
            buffer: vec![255, 0, 9, 9, 0, 255, 9, 9],
        };
        let canvas = compose(&[glyph], 2, &Ramp::shaded());
        assert_eq!(render(&canvas), vec!["@ ", " @"]);
    }

    #[test]
    fn height_is_the_tallest_glyph() {
        let canvas = compose(&[filled(1, 2, 128), filled(1, 5, 128)], 1, &Ramp::shaded());
        assert_eq!(canvas.height(), 5);
        assert_eq!(canvas.width(), 3);
    }
}
