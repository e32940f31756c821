//! `skwircle-studio`: renders squircle shapes to SVG (and optionally PNG).
//!
//! ```text
//! skwircle-studio shape.json --size 480x320 --out shape.svg --png shape.png
//! skwircle-studio --gallery --dark --out gallery.svg
//! ```
//!
//! A config file holds one shape configuration or an array of them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, bail};
use clap::Parser;
use skwircle_engine::logging::{LoggingConfig, init_logging};
use skwircle_ui::prelude::*;

/// Simulated frame length.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "skwircle-studio", version, about = "Render squircle shapes to SVG/PNG")]
struct Cli {
    /// Shape configuration JSON (one object or an array). Not needed with --gallery.
    config: Option<PathBuf>,

    /// Canvas size in logical pixels, e.g. 640x400.
    #[arg(long, default_value = "640x400", value_parser = parse_size)]
    size: Dimensions,

    /// Output SVG path.
    #[arg(long, default_value = "skwircle.svg")]
    out: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Render every built-in preset instead of a config file.
    #[arg(long, default_value_t = false)]
    gallery: bool,

    /// Frames to simulate before capturing (fade-ins need ~13 at 16 ms).
    #[arg(long, default_value_t = 20)]
    frames: u32,

    /// Grid columns.
    #[arg(long, default_value_t = 3)]
    columns: usize,

    /// Use the dark default palette.
    #[arg(long, default_value_t = false)]
    dark: bool,

    /// Log filter (env_logger syntax). Falls back to RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let shapes = if cli.gallery {
        gallery()
    } else {
        let Some(path) = &cli.config else {
            bail!("pass a config file or --gallery");
        };
        load_shapes(path)?
    };
    log::info!("rendering {} shape(s) at {}x{}", shapes.len(), cli.size.width, cli.size.height);

    let palette = if cli.dark { DefaultPalette::Dark } else { DefaultPalette::Light };
    let svg = render_svg(shapes, cli.columns, cli.size, palette, cli.frames);

    write_file(&cli.out, svg.as_bytes())?;
    log::info!("wrote {}", cli.out.display());

    if let Some(png) = &cli.png {
        rasterize(&svg, png)?;
        log::info!("wrote {}", png.display());
    }
    Ok(())
}

fn parse_size(s: &str) -> Result<Dimensions, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let parse = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("bad size `{v}`: {e}"));
    let dims = Dimensions::new(parse(w)?, parse(h)?);
    if dims.is_empty() {
        return Err(format!("size must be positive, got `{s}`"));
    }
    Ok(dims)
}

fn load_shapes(path: &Path) -> anyhow::Result<Vec<Squircle>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read config '{}'", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parse config '{}'", path.display()))?;

    let configs: Vec<ShapeConfig> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        _ => serde_json::from_value(value).map(|c| vec![c]),
    }
    .with_context(|| format!("invalid shape config '{}'", path.display()))?;

    Ok(configs.into_iter().map(Squircle::new).collect())
}

/// One shape per preset, with placeholder content where the preset pads.
fn gallery() -> Vec<Squircle> {
    ShapePreset::ALL
        .iter()
        .map(|&preset| {
            let content = match preset {
                ShapePreset::Card => Vec2::new(120.0, 72.0),
                ShapePreset::Button => Vec2::new(88.0, 16.0),
                ShapePreset::Badge => Vec2::new(24.0, 12.0),
                ShapePreset::Avatar => Vec2::splat(64.0),
                ShapePreset::Input => Vec2::new(160.0, 18.0),
                ShapePreset::Chip => Vec2::new(56.0, 14.0),
            };
            let ink = Color::from_rgb_hex(0x94a3b8).with_alpha(0.6);
            Squircle::preset(preset).child(Swatch::new(content, ink))
        })
        .collect()
}

/// Runs `frames` frames of a grid of `shapes` and renders the last one.
fn render_svg(
    shapes: Vec<Squircle>,
    columns: usize,
    size: Dimensions,
    palette: DefaultPalette,
    frames: u32,
) -> String {
    let mut scene = UiScene::with_palette(palette);
    let mut root = Element::new(Grid::new(columns).gap(24.0).padding_all(24.0).children(shapes));
    let viewport = size.to_vec2();
    let input = UiInput::away();

    // At least two frames: the first reports sizes, the second publishes them.
    for _ in 0..frames.max(2) {
        let _ = scene.frame(&mut root, viewport, &input, FRAME);
    }

    let background = palette.color(ColorToken::Surface);
    SvgDocument::new().with_background(background).render(&mut scene.draw_list, size)
}

fn rasterize(svg: &str, path: &Path) -> anyhow::Result<()> {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default()).context("parse rendered svg")?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("failed to allocate {}x{} pixmap", size.width(), size.height()))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.save_png(path).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
