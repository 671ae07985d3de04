// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line entry point: replay a gesture script on an image and write
// the cropped result.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use cropframe::app::document::RasterDocument;
use cropframe::app::preview::PreviewRenderer;
use cropframe::app::render::{export_selection, render_selection};
use cropframe::app::surface::SurfaceMapping;
use cropframe::app::{AppModel, script, update};
use cropframe::config::AppConfig;
use cropframe::{Bounds, Point};

/// Crop an image by replaying pointer gestures on it.
#[derive(Parser, Debug, Clone)]
#[command(name = "cropframe", version, about)]
pub struct Args {
    /// Image to crop.
    pub file: PathBuf,

    /// Where to write the cropped image.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Gesture script, e.g. "down 100,50; move 350,150; up".
    #[arg(short, long)]
    pub gestures: Option<String>,

    /// Read the gesture script from a file.
    #[arg(long, conflicts_with = "gestures")]
    pub script: Option<PathBuf>,

    /// Displayed size (WxH) the gesture coordinates refer to.
    #[arg(long, value_parser = parse_size)]
    pub display: Option<(f32, f32)>,

    /// Also write a preview with the crop overlay drawn on it.
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Config file to use instead of the user config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the corner handle hit tolerance.
    #[arg(long)]
    pub handle_tolerance: Option<f32>,

    /// Override the minimum selection size.
    #[arg(long)]
    pub min_size: Option<f32>,

    /// Keep tiny new selections instead of growing them to the minimum size.
    #[arg(long)]
    pub no_expand: bool,
}

fn parse_size(text: &str) -> Result<(f32, f32), String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got `{text}`"))?;
    let side = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid size `{v}`: {e}"))
    };
    Ok((side(w)?, side(h)?))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args);

    let document = RasterDocument::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let (width, height) = document.dimensions();
    let bounds = Bounds::from_pixels(width, height)?;

    let mapping = match args.display {
        Some(displayed) => {
            let surface = (bounds.width(), bounds.height());
            SurfaceMapping::new(Point::default(), displayed, surface)?
        }
        None => SurfaceMapping::identity(bounds),
    };

    let mut model = AppModel::new(&config);
    model.open_surface(mapping)?;

    let script_text = match (&args.gestures, &args.script) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        (None, None) => String::new(),
    };
    for message in script::parse(&script_text)? {
        let status = update(&mut model, message.clone());
        log::debug!("{message:?} -> {status:?}");
    }
    if model.selector.is_dragging() {
        log::warn!("Script ended mid-gesture; finishing it");
        model.selector.end_gesture();
    }

    let cropped = export_selection(&model.selector, &document)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.file, config.default_output_dir.as_deref()));
    cropped
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if let Some(rect) = model.selector.current_rectangle() {
        println!(
            "{} ({}x{} at {},{})",
            output.display(),
            cropped.width(),
            cropped.height(),
            rect.x0,
            rect.y0
        );
    }

    if let Some(path) = &args.preview {
        let mut renderer = PreviewRenderer::new(&document);
        render_selection(&model.selector, &mut renderer, model.show_grid)?;
        renderer
            .into_image()
            .save(path)
            .with_context(|| format!("failed to write preview {}", path.display()))?;
    }

    Ok(())
}

fn load_config(args: &Args) -> AppConfig {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if let Some(tolerance) = args.handle_tolerance {
        config.handle_tolerance = tolerance;
    }
    if let Some(min_size) = args.min_size {
        config.min_selection_size = min_size;
    }
    if args.no_expand {
        config.expand_small_selection = false;
    }
    config.sanitized()
}

/// `<dir>/<stem>-crop.png`, in the configured directory when it exists.
fn default_output_path(source: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = source
        .file_stem()
        .map_or_else(|| "image".into(), |s| s.to_string_lossy());
    let name = format!("{stem}-crop.png");

    match output_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => dir.join(name),
        None => source.with_file_name(name),
    }
}
