use std::path::PathBuf;

use anyhow::Result;
use bandcut_core::io::load_raster;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_raster(&args.file)?;
    let color = image.color();

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Format:      {}", image.format_name());
    println!("Color type:  {:?}", color);

    let bytes = image.width() as u64 * image.height() as u64 * color.bytes_per_pixel() as u64;
    println!("Decoded:     {:.1} MB", bytes as f64 / (1024.0 * 1024.0));

    Ok(())
}
