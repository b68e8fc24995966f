use std::path::PathBuf;

/// What the controls and status bar show.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// A load or save is in flight on the worker.
    pub busy: bool,

    /// Message for the modal error dialog.
    pub error_popup: Option<String>,

    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,

    /// Height of the canvas on the last frame, used to fit the next image.
    pub canvas_height: Option<f32>,
}
