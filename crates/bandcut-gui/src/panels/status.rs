use crate::app::BandcutApp;

pub fn show(ctx: &egui::Context, app: &mut BandcutApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Fixed height for 3 lines so the canvas doesn't jump as logs arrive.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(geometry) = app.session.geometry() {
                ui.label(format!("{}x{}", geometry.image_width, geometry.image_height));
                ui.separator();
                ui.label(format!("Scale: {:.0}%", geometry.scale * 100.0));
            } else {
                ui.label("No image");
            }
        });

        ui.add_space(2.0);
    });
}
