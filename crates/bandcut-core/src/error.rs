use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BandcutError {
    #[error("Degenerate image: {width}x{height} cannot fit a view of height {display_height}")]
    DegenerateImage {
        width: u32,
        height: u32,
        display_height: f64,
    },

    #[error("Invalid band bounds {start_y}..{end_y} for image height {height}")]
    InvalidBounds { start_y: f64, end_y: f64, height: u32 },

    #[error("Please select both start and end Y positions")]
    SelectionIncomplete,

    #[error("No image loaded")]
    NoImage,

    #[error("Image has no source file to write next to")]
    NoSourcePath,

    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, BandcutError>;
