use std::path::{Path, PathBuf};
use std::sync::mpsc;

use bandcut_core::io::{load_raster, save_raster};
use bandcut_core::raster::RasterImage;
use tracing::warn;

use crate::messages::{WorkerCommand, WorkerResult};

/// Run codec work off the UI thread. Results are posted back and a repaint is
/// requested so they are picked up promptly.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("bandcut-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => handle_load(&path, &tx, &ctx),
            WorkerCommand::SaveImage {
                image,
                path,
                source_path,
            } => handle_save(&image, &path, source_path, &tx, &ctx),
        }
    }
}

fn handle_load(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match load_raster(path) {
        Ok(image) => send(
            tx,
            ctx,
            WorkerResult::ImageLoaded {
                path: path.to_path_buf(),
                image,
            },
        ),
        Err(e) => {
            warn!("{e}");
            send_error(tx, ctx, e.to_string());
        }
    }
}

fn handle_save(
    image: &RasterImage,
    path: &Path,
    source_path: PathBuf,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_raster(image, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::ImageSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => {
            warn!("{e}");
            send(
                tx,
                ctx,
                WorkerResult::SaveFailed {
                    source_path,
                    message: e.to_string(),
                },
            );
        }
    }
}
