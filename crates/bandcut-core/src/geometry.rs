use crate::consts::{DEFAULT_BOTTOM_PADDING, DEFAULT_TOP_PADDING};
use crate::error::{BandcutError, Result};

/// Fit-to-height mapping between the on-screen view and native pixel rows.
///
/// Only the vertical axis matters: markers are full-width horizontal lines, so
/// horizontal pointer coordinates are never converted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayGeometry {
    /// Display pixels per image pixel.
    pub scale: f64,
    pub top_padding: f64,
    pub bottom_padding: f64,
    pub image_width: u32,
    pub image_height: u32,
}

impl DisplayGeometry {
    /// Scale an `image_width`x`image_height` image so it fills
    /// `available_display_height` exactly.
    pub fn compute(image_width: u32, image_height: u32, available_display_height: f64) -> Result<Self> {
        if image_width == 0
            || image_height == 0
            || !available_display_height.is_finite()
            || available_display_height <= 0.0
        {
            return Err(BandcutError::DegenerateImage {
                width: image_width,
                height: image_height,
                display_height: available_display_height,
            });
        }

        Ok(Self {
            scale: available_display_height / image_height as f64,
            top_padding: DEFAULT_TOP_PADDING,
            bottom_padding: DEFAULT_BOTTOM_PADDING,
            image_width,
            image_height,
        })
    }

    pub fn with_padding(mut self, top: f64, bottom: f64) -> Self {
        self.top_padding = top;
        self.bottom_padding = bottom;
        self
    }

    /// Width of the scaled preview, rounded to whole display pixels.
    pub fn display_width(&self) -> u32 {
        (self.image_width as f64 * self.scale).round() as u32
    }

    pub fn display_height(&self) -> f64 {
        self.image_height as f64 * self.scale
    }

    /// Convert a pointer row on the canvas into an image row, clamped to the
    /// image extent.
    pub fn to_image_space(&self, display_y: f64) -> f64 {
        let y = (display_y - self.top_padding).clamp(0.0, self.display_height());
        y / self.scale
    }

    /// Canvas row at which an image row is drawn.
    pub fn to_display_space(&self, image_y: f64) -> f64 {
        image_y * self.scale + self.top_padding
    }

    /// Convert a display-space distance (no padding offset) to image pixels.
    pub fn to_image_distance(&self, display_distance: f64) -> f64 {
        display_distance / self.scale
    }
}
