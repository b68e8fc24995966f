/// Display-space gap between the top of the canvas and the first image row.
pub const DEFAULT_TOP_PADDING: f64 = 20.0;

/// Display-space gap kept free below the last image row.
pub const DEFAULT_BOTTOM_PADDING: f64 = 20.0;

/// Smallest distance, in image pixels, allowed between the two markers.
pub const MIN_MARKER_GAP: f64 = 1.0;

/// Distance, in display pixels, within which a press grabs an existing marker.
pub const MARKER_HIT_TOLERANCE: f64 = 4.0;

/// File stem suffix used when the source is not overwritten.
pub const DEFAULT_TRIMMED_SUFFIX: &str = "_trimmed";

/// Initial window size of the desktop front-end.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [600.0, 860.0];

/// Extensions offered by file pickers.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];
