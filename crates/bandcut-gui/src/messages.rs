use std::path::PathBuf;

use bandcut_core::raster::RasterImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file.
    LoadImage { path: PathBuf },

    /// Encode a trimmed image. `source_path` is reloaded if writing fails.
    SaveImage {
        image: RasterImage,
        path: PathBuf,
        source_path: PathBuf,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        image: RasterImage,
    },
    ImageSaved {
        path: PathBuf,
    },
    SaveFailed {
        source_path: PathBuf,
        message: String,
    },
    Error {
        message: String,
    },
}
