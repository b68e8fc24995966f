use std::path::{Path, PathBuf};

use tracing::info;

use crate::band::remove_band;
use crate::config::{OutputConfig, ViewConfig};
use crate::consts::MARKER_HIT_TOLERANCE;
use crate::error::{BandcutError, Result};
use crate::geometry::DisplayGeometry;
use crate::io::{load_raster, output_path, save_raster, OutputPolicy};
use crate::raster::RasterImage;
use crate::selection::{Marker, Selection};

/// Result of a trim: the new image and where it came from.
#[derive(Clone, Debug)]
pub struct TrimOutcome {
    pub image: RasterImage,
    pub source_path: Option<PathBuf>,
}

impl TrimOutcome {
    /// Suggested destination; `None` for images that were never read from disk.
    pub fn output_path(&self, policy: OutputPolicy, suffix: &str) -> Option<PathBuf> {
        self.source_path
            .as_deref()
            .map(|source| output_path(source, policy, suffix))
    }
}

/// Everything tied to one loaded image. Replaced as a whole, never patched,
/// so a failed load or trim leaves the previous one intact.
#[derive(Clone, Debug)]
struct LoadedImage {
    source_path: Option<PathBuf>,
    original: RasterImage,
    geometry: DisplayGeometry,
    selection: Selection,
}

/// One image being trimmed, possibly several times in a row.
#[derive(Clone, Debug)]
pub struct ImageSession {
    view: ViewConfig,
    canvas_height: Option<f64>,
    loaded: Option<LoadedImage>,
}

impl ImageSession {
    pub fn new(view: ViewConfig) -> Self {
        Self {
            view,
            canvas_height: None,
            loaded: None,
        }
    }

    /// Height of the canvas the image is fitted into. Takes effect on the
    /// next load or trim; without it images are shown at native size.
    pub fn set_canvas_height(&mut self, canvas_height: f64) {
        self.canvas_height = Some(canvas_height);
    }

    pub fn load(&mut self, path: &Path) -> Result<()> {
        let image = load_raster(path)?;
        self.load_image(image, Some(path.to_path_buf()))
    }

    pub fn load_image(&mut self, image: RasterImage, source_path: Option<PathBuf>) -> Result<()> {
        let geometry = self.geometry_for(&image)?;
        self.adopt(image, geometry, source_path);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn original(&self) -> Option<&RasterImage> {
        self.loaded.as_ref().map(|l| &l.original)
    }

    pub fn geometry(&self) -> Option<&DisplayGeometry> {
        self.loaded.as_ref().map(|l| &l.geometry)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.loaded.as_ref().map(|l| &l.selection)
    }

    /// Direct access for callers that already work in image space.
    pub fn selection_mut(&mut self) -> Option<&mut Selection> {
        self.loaded.as_mut().map(|l| &mut l.selection)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.loaded.as_ref().and_then(|l| l.source_path.as_deref())
    }

    /// Primary button pressed at canvas row `display_y`. Returns true when the
    /// markers need redrawing.
    pub fn pointer_pressed(&mut self, display_y: f64) -> bool {
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        let image_y = loaded.geometry.to_image_space(display_y);
        let tolerance = loaded.geometry.to_image_distance(MARKER_HIT_TOLERANCE);
        loaded.selection.press(image_y, tolerance)
    }

    pub fn pointer_dragged(&mut self, display_y: f64) -> bool {
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        let image_y = loaded.geometry.to_image_space(display_y);
        match loaded.selection.dragging() {
            Some(Marker::Start) => loaded.selection.drag_start_to(image_y),
            Some(Marker::End) => loaded.selection.drag_end_to(image_y),
            None => false,
        }
    }

    pub fn pointer_released(&mut self) -> bool {
        self.loaded
            .as_mut()
            .is_some_and(|loaded| loaded.selection.end_drag())
    }

    /// Remove the selected band. The result becomes the original for the next
    /// trim and the selection starts over.
    pub fn trim(&mut self) -> Result<TrimOutcome> {
        let (image, geometry) = self.prepare_trim()?;
        let source_path = self.source_path().map(Path::to_path_buf);
        self.adopt(image.clone(), geometry, source_path.clone());
        Ok(TrimOutcome { image, source_path })
    }

    /// Trim and write the result according to `output`. Nothing changes in
    /// the session unless the file was written; afterwards the written file is
    /// the session's source.
    pub fn trim_and_save(&mut self, output: &OutputConfig) -> Result<PathBuf> {
        if !self.is_loaded() {
            return Err(BandcutError::NoImage);
        }
        let source = self.source_path().ok_or(BandcutError::NoSourcePath)?;
        let path = output_path(source, output.policy, &output.suffix);

        let (image, geometry) = self.prepare_trim()?;
        save_raster(&image, &path)?;
        self.adopt(image, geometry, Some(path.clone()));
        Ok(path)
    }

    fn prepare_trim(&self) -> Result<(RasterImage, DisplayGeometry)> {
        let loaded = self.loaded.as_ref().ok_or(BandcutError::NoImage)?;
        let (start_y, end_y) = loaded
            .selection
            .bounds()
            .ok_or(BandcutError::SelectionIncomplete)?;

        let trimmed = remove_band(&loaded.original, start_y, end_y)?;
        let geometry = self.geometry_for(&trimmed)?;
        info!(
            start_y,
            end_y,
            from = loaded.original.height(),
            to = trimmed.height(),
            "Band removed"
        );
        Ok((trimmed, geometry))
    }

    fn geometry_for(&self, image: &RasterImage) -> Result<DisplayGeometry> {
        let canvas_height = self
            .canvas_height
            .unwrap_or_else(|| self.view.native_canvas_height(image.height()));
        let geometry = DisplayGeometry::compute(
            image.width(),
            image.height(),
            self.view.fit_height(canvas_height),
        )?;
        Ok(geometry.with_padding(self.view.top_padding, self.view.bottom_padding))
    }

    fn adopt(&mut self, image: RasterImage, geometry: DisplayGeometry, source_path: Option<PathBuf>) {
        self.loaded = Some(LoadedImage {
            source_path,
            selection: Selection::new(image.height()),
            original: image,
            geometry,
        });
    }
}
