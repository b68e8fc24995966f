use bandcut_core::consts::IMAGE_EXTENSIONS;
use bandcut_core::io::OutputPolicy;

use crate::app::BandcutApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut BandcutApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.label("Drag and drop an image file here or use the Browse button");

        ui.horizontal(|ui| {
            let busy = app.ui_state.busy;
            if ui.add_enabled(!busy, egui::Button::new("Browse")).clicked() {
                browse(app);
            }

            let can_trim = !busy && app.session.is_loaded();
            if ui
                .add_enabled(can_trim, egui::Button::new("Trim Image"))
                .clicked()
            {
                app.trim(ctx);
            }

            let mut overwrite = app.config.output.policy == OutputPolicy::Overwrite;
            if ui
                .checkbox(&mut overwrite, "Overwrite original image")
                .changed()
            {
                app.config.output.policy = if overwrite {
                    OutputPolicy::Overwrite
                } else {
                    OutputPolicy::Suffixed
                };
            }

            if busy {
                ui.spinner();
            }
        });

        match &app.ui_state.file_path {
            Some(path) => ui.label(path.display().to_string()),
            None => ui.weak("No file selected"),
        };

        if let Some(selection) = app.session.selection() {
            let detail = match selection.bounds() {
                Some((start, end)) => format!("{}: rows {start:.0} to {end:.0}", selection.state()),
                None => selection.state().to_string(),
            };
            ui.small(detail);
        }

        ui.add_space(4.0);
    });
}

fn browse(app: &mut BandcutApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}
