use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bandcut_core::config::BandcutConfig;
use bandcut_core::io::{save_raster, OutputPolicy};
use bandcut_core::raster::RasterImage;
use bandcut_core::session::ImageSession;
use clap::Args;
use tracing::{debug, info};

use crate::summary::{print_trim_summary, TrimSummary};

use super::spinner;

#[derive(Args)]
pub struct TrimArgs {
    /// Input image file
    pub file: PathBuf,

    /// Row of the first marker
    #[arg(long, allow_hyphen_values = true)]
    pub start: f64,

    /// Row of the second marker
    #[arg(long, allow_hyphen_values = true)]
    pub end: f64,

    /// Treat --start/--end as rows of a preview canvas this many pixels tall
    #[arg(long)]
    pub view_height: Option<f64>,

    /// Replace the input file
    #[arg(long, conflicts_with = "keep_original")]
    pub overwrite: bool,

    /// Write <name>_trimmed.<ext> next to the input
    #[arg(long)]
    pub keep_original: bool,

    /// Output file (overrides --overwrite / --keep-original)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &TrimArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => BandcutConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => BandcutConfig::default(),
    };
    debug!(?config, "Trim configuration");

    let mut output = config.output.clone();
    if args.overwrite {
        output.policy = OutputPolicy::Overwrite;
    } else if args.keep_original {
        output.policy = OutputPolicy::Suffixed;
    }

    let mut session = ImageSession::new(config.view.clone());
    if let Some(height) = args.view_height {
        session.set_canvas_height(height);
    }

    let pb = spinner("Decoding...");
    let loaded = session.load(&args.file);
    pb.finish_and_clear();
    loaded?;

    let before = session
        .original()
        .map(|img| (img.width(), img.height()))
        .context("No image loaded")?;

    if args.view_height.is_some() {
        session.pointer_pressed(args.start);
        session.pointer_pressed(args.end);
    } else {
        let selection = session.selection_mut().context("No image loaded")?;
        selection.on_primary_click(args.start);
        selection.on_primary_click(args.end);
    }
    let (start_y, end_y) = session
        .selection()
        .and_then(|s| s.bounds())
        .context("Both markers are required")?;

    let pb = spinner("Encoding...");
    let written = match &args.output {
        Some(path) => session
            .trim()
            .and_then(|outcome| save_to(outcome.image, path))
            .map(|image| (path.clone(), image.format_name())),
        None => session.trim_and_save(&output).map(|path| {
            let format = session.original().map(|img| img.format_name()).unwrap_or("?");
            (path, format)
        }),
    };
    pb.finish_and_clear();
    let (written, format) = written?;

    let after = session.original().map(|img| img.height()).unwrap_or_default();
    info!(
        output = %written.display(),
        removed_rows = before.1 - after,
        "Trim complete"
    );
    print_trim_summary(&TrimSummary {
        input: &args.file,
        output: &written,
        format,
        start_y,
        end_y,
        width: before.0,
        height_before: before.1,
        height_after: after,
    });

    Ok(())
}

/// Write `image` to an explicit output file, encoded in the format its
/// extension names. Returns the image as written.
fn save_to(image: RasterImage, path: &Path) -> bandcut_core::error::Result<RasterImage> {
    let image = image.for_path(path);
    save_raster(&image, path)?;
    Ok(image)
}
