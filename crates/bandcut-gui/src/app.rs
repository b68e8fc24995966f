use std::path::PathBuf;
use std::sync::mpsc;

use bandcut_core::config::BandcutConfig;
use bandcut_core::error::BandcutError;
use bandcut_core::raster::RasterImage;
use bandcut_core::session::ImageSession;
use tracing::{info, warn};

use crate::convert::preview_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UIState, ViewportState};
use crate::worker;

pub struct BandcutApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: ImageSession,
    pub config: BandcutConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
}

impl BandcutApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());
        let config = BandcutConfig::default();

        Self {
            cmd_tx,
            result_rx,
            session: ImageSession::new(config.view.clone()),
            config,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, image } => {
                    self.ui_state.busy = false;
                    self.adopt_image(ctx, path, image);
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state
                        .add_log(format!("Trimmed image saved: {}", path.display()));
                    // Show what actually landed on disk, encoder losses included.
                    self.request_load(path);
                }
                WorkerResult::SaveFailed {
                    source_path,
                    message,
                } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.ui_state.error_popup = Some(message);
                    self.request_load(source_path);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.busy = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.ui_state.error_popup = Some(message);
                }
            }
        }
    }

    fn adopt_image(&mut self, ctx: &egui::Context, path: PathBuf, image: RasterImage) {
        if let Some(height) = self.viewport.canvas_height {
            self.session.set_canvas_height(height as f64);
        }
        let (width, height) = (image.width(), image.height());
        match self.session.load_image(image, Some(path.clone())) {
            Ok(()) => {
                self.ui_state.add_log(format!(
                    "Opened: {} ({width}x{height})",
                    path.display()
                ));
                self.ui_state.file_path = Some(path);
                self.refresh_texture(ctx);
            }
            Err(e) => {
                warn!("{e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
                self.ui_state.error_popup = Some(e.to_string());
            }
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let (Some(image), Some(geometry)) = (self.session.original(), self.session.geometry())
        else {
            self.viewport.texture = None;
            return;
        };
        let preview = preview_color_image(image, geometry);
        self.viewport.texture =
            Some(ctx.load_texture("canvas", preview, egui::TextureOptions::LINEAR));
    }

    pub fn request_load(&mut self, path: PathBuf) {
        self.ui_state.busy = true;
        self.send_command(WorkerCommand::LoadImage { path });
    }

    /// Cut the selected band and hand the result to the worker for writing.
    pub fn trim(&mut self, ctx: &egui::Context) {
        if self.ui_state.busy {
            return;
        }
        let outcome = match self.session.trim() {
            Ok(outcome) => outcome,
            Err(e @ BandcutError::SelectionIncomplete) => {
                self.ui_state.error_popup = Some(e.to_string());
                return;
            }
            Err(e) => {
                warn!("{e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
                self.ui_state.error_popup = Some(e.to_string());
                return;
            }
        };
        self.refresh_texture(ctx);

        let output = &self.config.output;
        let target = outcome.output_path(output.policy, &output.suffix);
        let (Some(path), Some(source_path)) = (target, outcome.source_path) else {
            self.ui_state
                .add_log("ERROR: trimmed image has no file to save next to".into());
            return;
        };

        info!(path = %path.display(), "Saving trimmed image");
        self.ui_state.busy = true;
        self.send_command(WorkerCommand::SaveImage {
            image: outcome.image,
            path,
            source_path,
        });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.request_load(path);
        }
    }
}

impl eframe::App for BandcutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::controls::show(ctx, self);
        panels::status::show(ctx, self);
        panels::canvas::show(ctx, self);

        if let Some(message) = self.ui_state.error_popup.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(message);
                        ui.add_space(8.0);
                        if ui.button("OK").clicked() {
                            self.ui_state.error_popup = None;
                        }
                    });
                });
        }
    }
}
