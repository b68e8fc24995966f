mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use bandcut_core::consts::DEFAULT_WINDOW_SIZE;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_min_inner_size([400.0, 400.0])
            .with_drag_and_drop(true)
            .with_title("Image Trimming Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "Bandcut",
        options,
        Box::new(|cc| Ok(Box::new(app::BandcutApp::new(&cc.egui_ctx)))),
    )
}
