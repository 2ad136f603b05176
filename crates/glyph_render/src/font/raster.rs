//! Glyph rasterization through FreeType.

use std::path::Path;

use freetype::face::LoadFlag;
use freetype::{Face, Library};
use log::debug;

use crate::RenderError;

/// The `FT_ENCODING_UNICODE` tag, `'u' 'n' 'i' 'c'` packed big-endian.
const ENCODING_UNICODE: u32 =
    (b'u' as u32) << 24 | (b'n' as u32) << 16 | (b'i' as u32) << 8 | (b'c' as u32);

/// One rasterized glyph: an 8-bit coverage bitmap plus its metrics.
///
/// Rows are `stride` bytes apart in `buffer`; the bearings are carried for
/// completeness but the compositor top-aligns glyphs without them.
#[derive(Clone, Debug)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    /// Horizontal bearing, pixels right of the pen position.
    pub left: i32,
    /// Vertical bearing, pixels above the baseline.
    pub top: i32,
    pub buffer: Vec<u8>,
}

impl GlyphBitmap {
    /// Coverage sample at `(x, y)`.
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        self.buffer[y * self.stride + x]
    }
}

/// FreeType rendering session for a single font file.
///
/// Field order matters: the face must be released before the library.
pub struct GlyphRasterizer {
    face: Face,
    _library: Library,
}

impl GlyphRasterizer {
    /// Initializes FreeType, loads the face, and fixes the rendering size.
    ///
    /// The pixel width is left at zero so FreeType derives it from the
    /// height, preserving the glyph aspect ratio. The Unicode charmap is
    /// selected explicitly rather than trusting the face's default map.
    pub fn new(font_file: &Path, pixel_height: u32) -> Result<Self, RenderError> {
        let library = Library::init().map_err(RenderError::RasterizerInit)?;
        let mut face = library.new_face(font_file, 0).map_err(|source| {
            RenderError::FaceLoad { path: font_file.to_path_buf(), source }
        })?;
        face.set_pixel_sizes(0, pixel_height).map_err(|source| {
            RenderError::FaceLoad { path: font_file.to_path_buf(), source }
        })?;

        // The safe wrapper does not expose FT_Select_Charmap.
        // SAFETY: the face handle is valid for the duration of the call.
        let status = unsafe {
            freetype::ffi::FT_Select_Charmap(
                face.raw_mut(),
                ENCODING_UNICODE as freetype::ffi::FT_Encoding,
            )
        };
        if status != 0 {
            return Err(RenderError::NoUnicodeCharmap);
        }

        Ok(Self { face, _library: library })
    }

    /// Loads and renders the glyph for one code point as an anti-aliased
    /// 8-bit coverage bitmap, copied out of the face's glyph slot.
    pub fn rasterize(&self, code_point: u32) -> Result<GlyphBitmap, RenderError> {
        self.face
            .load_char(code_point as usize, LoadFlag::RENDER)
            .map_err(|source| RenderError::GlyphLoad { code_point, source })?;

        let slot = self.face.glyph();
        let bitmap = slot.bitmap();
        let width = bitmap.width() as usize;
        let height = bitmap.rows() as usize;
        let stride = bitmap.pitch().unsigned_abs() as usize;

        // Empty bitmaps (whitespace glyphs) carry a null buffer pointer.
        let buffer = if width == 0 || height == 0 { Vec::new() } else { bitmap.buffer().to_vec() };

        debug!(
            "rasterized U+{code_point:04X}: {width}x{height}, stride {stride}, bearing ({}, {})",
            slot.bitmap_left(),
            slot.bitmap_top(),
        );

        Ok(GlyphBitmap {
            width,
            height,
            stride,
            left: slot.bitmap_left(),
            top: slot.bitmap_top(),
            buffer,
        })
    }
}
