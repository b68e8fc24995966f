use std::borrow::Cow;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BandcutError, Result};
use crate::raster::RasterImage;

/// Where a trimmed image is written relative to its source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputPolicy {
    /// Replace the source file.
    #[default]
    Overwrite,
    /// Write `<stem><suffix>.<ext>` next to the source.
    Suffixed,
}

/// Decode an image file, detecting its format from content first and from
/// the extension second.
pub fn load_raster(path: &Path) -> Result<RasterImage> {
    let load_error = |source: ImageError| BandcutError::Load {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| load_error(ImageError::IoError(e)))?;
    let format = match reader.format() {
        Some(format) => format,
        None => ImageFormat::from_path(path).map_err(load_error)?,
    };
    let pixels = reader.decode().map_err(load_error)?;

    info!(
        path = %path.display(),
        width = pixels.width(),
        height = pixels.height(),
        format = ?format,
        "Image loaded"
    );
    Ok(RasterImage::new(pixels, format))
}

/// Encode `image` to `path` in its own format.
pub fn save_raster(image: &RasterImage, path: &Path) -> Result<()> {
    encodable_pixels(&image.pixels, image.format)
        .save_with_format(path, image.format)
        .map_err(|source| BandcutError::Save {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Image saved"
    );
    Ok(())
}

/// Narrow the pixel layout to what the target encoder accepts.
/// JPEG has no alpha channel or 16-bit mode; the WebP and GIF encoders take
/// 8-bit RGB(A) only.
fn encodable_pixels(pixels: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match (format, pixels) {
        (ImageFormat::Jpeg, DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_)) => {
            Cow::Borrowed(pixels)
        }
        (ImageFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(pixels.to_rgb8())),
        (
            ImageFormat::WebP | ImageFormat::Gif,
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_),
        ) => Cow::Borrowed(pixels),
        (ImageFormat::WebP | ImageFormat::Gif, _) => {
            Cow::Owned(DynamicImage::ImageRgba8(pixels.to_rgba8()))
        }
        _ => Cow::Borrowed(pixels),
    }
}

/// Destination for a trimmed copy of `source`.
pub fn output_path(source: &Path, policy: OutputPolicy, suffix: &str) -> PathBuf {
    match policy {
        OutputPolicy::Overwrite => source.to_path_buf(),
        OutputPolicy::Suffixed => {
            let stem = source
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let file_name = match source.extension().and_then(|e| e.to_str()) {
                Some(ext) => format!("{stem}{suffix}.{ext}"),
                None => format!("{stem}{suffix}"),
            };
            source.with_file_name(file_name)
        }
    }
}
