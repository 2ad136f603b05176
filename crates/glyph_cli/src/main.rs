use anyhow::{bail, Context, Result};
use clap::Parser;
use glyph_render::{ArtOptions, GlyphArtRenderer, Ramp};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print text as ASCII-art glyph bitmaps using system fonts")]
struct Cli {
    /// Text to render; all arguments are joined with single spaces
    text: Vec<String>,
    /// Glyph pixel height requested from the rasterizer
    #[arg(long, default_value_t = 48)]
    size: u32,
    /// Blank columns inserted between consecutive glyphs
    #[arg(long, default_value_t = 2)]
    padding: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.text.is_empty() {
        bail!("usage: glyphscii [OPTIONS] <TEXT>...");
    }

    let text = cli.text.join(" ");
    if text.is_empty() {
        bail!("empty input");
    }

    let options =
        ArtOptions { pixel_height: cli.size, padding: cli.padding, ramp: Ramp::shaded() };
    let canvas = GlyphArtRenderer::default()
        .render_text(&text, &options)
        .with_context(|| format!("failed to render {text:?}"))?;

    for row in canvas.rows() {
        println!("{}", row);
    }

    Ok(())
}
