use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BOTTOM_PADDING, DEFAULT_TOP_PADDING, DEFAULT_TRIMMED_SUFFIX};
use crate::error::Result;
use crate::io::OutputPolicy;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BandcutConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BandcutConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Layout of the preview canvas, in display pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_top_padding")]
    pub top_padding: f64,
    #[serde(default = "default_bottom_padding")]
    pub bottom_padding: f64,
}

fn default_top_padding() -> f64 {
    DEFAULT_TOP_PADDING
}
fn default_bottom_padding() -> f64 {
    DEFAULT_BOTTOM_PADDING
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            top_padding: DEFAULT_TOP_PADDING,
            bottom_padding: DEFAULT_BOTTOM_PADDING,
        }
    }
}

impl ViewConfig {
    /// Height left for the image on a canvas of `canvas_height`.
    pub fn fit_height(&self, canvas_height: f64) -> f64 {
        canvas_height - self.top_padding - self.bottom_padding
    }

    /// Canvas height at which an image of `image_height` rows is shown 1:1.
    pub fn native_canvas_height(&self, image_height: u32) -> f64 {
        image_height as f64 + self.top_padding + self.bottom_padding
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub policy: OutputPolicy,
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_suffix() -> String {
    DEFAULT_TRIMMED_SUFFIX.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            policy: OutputPolicy::default(),
            suffix: default_suffix(),
        }
    }
}
