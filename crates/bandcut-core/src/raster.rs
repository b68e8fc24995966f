use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};

/// A decoded image together with the codec it was read from.
///
/// Pixels keep the color type and bit depth of the source; nothing in the
/// trimming path converts them.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub pixels: DynamicImage,
    pub format: ImageFormat,
}

impl RasterImage {
    pub fn new(pixels: DynamicImage, format: ImageFormat) -> Self {
        Self { pixels, format }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn color(&self) -> ColorType {
        self.pixels.color()
    }

    /// Replace the inherited output format.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Take the format named by `path`'s extension; unknown extensions keep
    /// the current one.
    pub fn for_path(self, path: &Path) -> Self {
        match ImageFormat::from_path(path) {
            Ok(format) => self.with_format(format),
            Err(_) => self,
        }
    }

    /// Short codec name, e.g. "PNG" or "JPEG".
    pub fn format_name(&self) -> &'static str {
        format_name(self.format)
    }
}

pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Gif => "GIF",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Tga => "TGA",
        ImageFormat::Ico => "ICO",
        _ => "OTHER",
    }
}
