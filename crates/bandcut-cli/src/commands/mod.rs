pub mod config;
pub mod info;
pub mod trim;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the codec blocks on a large file.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
