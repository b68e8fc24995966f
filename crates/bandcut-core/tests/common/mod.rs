#![allow(dead_code)]

use bandcut_core::raster::RasterImage;
use image::{DynamicImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// RGB image whose red channel encodes the row index (mod 256) and green the
/// column, so surviving rows can be identified after a trim.
pub fn row_tagged_rgb(width: u32, height: u32) -> RasterImage {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([(y % 256) as u8, (x % 256) as u8, 7]));
    RasterImage::new(DynamicImage::ImageRgb8(img), ImageFormat::Png)
}

/// 16-bit grayscale image where every pixel holds `row * 100`.
pub fn row_tagged_luma16(width: u32, height: u32) -> RasterImage {
    let img = image::ImageBuffer::from_fn(width, height, |_, y| Luma([(y * 100) as u16]));
    RasterImage::new(DynamicImage::ImageLuma16(img), ImageFormat::Png)
}

/// RGBA image with a row-dependent alpha channel.
pub fn row_tagged_rgba(width: u32, height: u32) -> RasterImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(y % 256) as u8, (x % 256) as u8, 0, (255 - y % 256) as u8])
    });
    RasterImage::new(DynamicImage::ImageRgba8(img), ImageFormat::Png)
}

/// Row tags (red channel) of every row in column 0.
pub fn row_tags(image: &RasterImage) -> Vec<u8> {
    let rgb = image.pixels.to_rgb8();
    (0..rgb.height()).map(|y| rgb.get_pixel(0, y).0[0]).collect()
}
