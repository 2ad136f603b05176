mod canvas;
mod font;
mod text;

use std::path::PathBuf;

pub use canvas::compose::{compose, Canvas};
pub use canvas::ramp::Ramp;
pub use font::matcher::FontSource;
pub use font::raster::{GlyphBitmap, GlyphRasterizer};
pub use text::decode::decode_utf8;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no decodable characters in input")]
    EmptyInput,
    #[error("failed to initialize fontconfig")]
    FontconfigInit,
    #[error("no font matches the requested characters")]
    NoFontMatch,
    #[error("matched font carries no file path")]
    MissingFontFile,
    #[error("failed to initialize the FreeType library: {0}")]
    RasterizerInit(#[source] freetype::Error),
    #[error("failed to load font face {path:?}: {source}")]
    FaceLoad { path: PathBuf, source: freetype::Error },
    #[error("font face has no Unicode character map")]
    NoUnicodeCharmap,
    #[error("failed to rasterize glyph for U+{code_point:04X}: {source}")]
    GlyphLoad { code_point: u32, source: freetype::Error },
}

#[derive(Clone, Debug)]
pub struct ArtOptions {
    /// Pixel height requested from the rasterizer; width follows the
    /// glyph's own aspect ratio.
    pub pixel_height: u32,
    /// Blank columns between consecutive glyphs.
    pub padding: usize,
    pub ramp: Ramp,
}

impl Default for ArtOptions {
    fn default() -> Self {
        Self { pixel_height: 48, padding: 2, ramp: Ramp::shaded() }
    }
}

#[derive(Default)]
pub struct GlyphArtRenderer;

impl GlyphArtRenderer {
    /// Renders `text` as one canvas of ASCII-art glyph bitmaps.
    ///
    /// One fontconfig query covers every decoded code point, so the match
    /// is made against the whole string at once. The first glyph that
    /// fails to rasterize aborts the run; nothing partial is returned.
    pub fn render_text(&self, text: &str, options: &ArtOptions) -> Result<Canvas, RenderError> {
        let code_points = decode_utf8(text.as_bytes());
        if code_points.is_empty() {
            return Err(RenderError::EmptyInput);
        }

        let source = FontSource::init()?;
        let font_file = source.match_codepoints(&code_points)?;

        let rasterizer = GlyphRasterizer::new(&font_file, options.pixel_height)?;
        let mut glyphs = Vec::with_capacity(code_points.len());
        for &code_point in &code_points {
            glyphs.push(rasterizer.rasterize(code_point)?);
        }

        Ok(compose(&glyphs, options.padding, &options.ramp))
    }
}
