use image::{DynamicImage, ImageBuffer, Pixel};
use tracing::debug;

use crate::error::{BandcutError, Result};
use crate::raster::RasterImage;

/// Row ranges kept by a band removal: `[0, top_rows)` and `[resume_row, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandRows {
    pub top_rows: u32,
    pub resume_row: u32,
    pub height: u32,
}

impl BandRows {
    /// Validate `start_y..end_y` against `height` and snap it outward to whole
    /// rows: the cut starts at `floor(start_y)` and resumes at `ceil(end_y)`.
    pub fn resolve(start_y: f64, end_y: f64, height: u32) -> Result<Self> {
        let valid = start_y.is_finite()
            && end_y.is_finite()
            && 0.0 <= start_y
            && start_y <= end_y
            && end_y <= height as f64;
        if !valid {
            return Err(BandcutError::InvalidBounds {
                start_y,
                end_y,
                height,
            });
        }

        Ok(Self {
            top_rows: start_y.floor() as u32,
            resume_row: (end_y.ceil() as u32).min(height),
            height,
        })
    }

    pub fn removed_rows(&self) -> u32 {
        self.resume_row - self.top_rows
    }

    pub fn output_height(&self) -> u32 {
        self.height - self.removed_rows()
    }
}

/// Cut the rows between `start_y` and `end_y` out of `image` and join the
/// remaining top and bottom parts.
///
/// Rows are copied byte for byte, so width, color type, bit depth and format
/// all carry over unchanged.
pub fn remove_band(image: &RasterImage, start_y: f64, end_y: f64) -> Result<RasterImage> {
    let rows = BandRows::resolve(start_y, end_y, image.height())?;
    debug!(
        top_rows = rows.top_rows,
        resume_row = rows.resume_row,
        height = rows.height,
        "Removing band"
    );

    let pixels = match &image.pixels {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(splice_rows(buf, &rows)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(splice_rows(buf, &rows)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(splice_rows(buf, &rows)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(splice_rows(buf, &rows)),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(splice_rows(buf, &rows)),
        DynamicImage::ImageLumaA16(buf) => DynamicImage::ImageLumaA16(splice_rows(buf, &rows)),
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(splice_rows(buf, &rows)),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(splice_rows(buf, &rows)),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(splice_rows(buf, &rows)),
        DynamicImage::ImageRgba32F(buf) => DynamicImage::ImageRgba32F(splice_rows(buf, &rows)),
        other => DynamicImage::ImageRgba16(splice_rows(&other.to_rgba16(), &rows)),
    };

    Ok(RasterImage::new(pixels, image.format))
}

fn splice_rows<P: Pixel>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    rows: &BandRows,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let width = src.width();
    let row_len = width as usize * P::CHANNEL_COUNT as usize;
    let raw = src.as_raw();

    let top_end = rows.top_rows as usize * row_len;
    let bottom_start = rows.resume_row as usize * row_len;

    let mut data = Vec::with_capacity(rows.output_height() as usize * row_len);
    data.extend_from_slice(&raw[..top_end]);
    data.extend_from_slice(&raw[bottom_start..rows.height as usize * row_len]);

    ImageBuffer::from_vec(width, rows.output_height(), data)
        .expect("spliced rows match output dimensions")
}
