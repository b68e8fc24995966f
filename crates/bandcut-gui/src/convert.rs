use bandcut_core::geometry::DisplayGeometry;
use bandcut_core::raster::RasterImage;
use image::imageops::FilterType;

/// Resample `image` to its on-screen size and convert it to an egui ColorImage.
pub fn preview_color_image(image: &RasterImage, geometry: &DisplayGeometry) -> egui::ColorImage {
    let width = geometry.display_width().max(1);
    let height = (geometry.display_height().round() as u32).max(1);
    let scaled = image
        .pixels
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgba8();

    egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], scaled.as_raw())
}
