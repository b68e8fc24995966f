use bandcut_core::consts::MARKER_HIT_TOLERANCE;
use bandcut_core::geometry::DisplayGeometry;
use bandcut_core::selection::{Selection, SelectionState};

use crate::app::BandcutApp;

const START_MARKER_COLOR: egui::Color32 = egui::Color32::RED;
const END_MARKER_COLOR: egui::Color32 = egui::Color32::BLUE;
const MARKER_WIDTH: f32 = 2.0;
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

pub fn show(ctx: &egui::Context, app: &mut BandcutApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        app.viewport.canvas_height = Some(rect.height());
        paint_background(ui, rect);

        let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
        match (texture_id, app.session.geometry().copied()) {
            (Some(texture_id), Some(geometry)) => {
                let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
                handle_pointer(ui, &response, app, rect);
                update_cursor(ui, &response, app, rect);

                draw_image(ui, texture_id, image_rect(rect, &geometry));
                if let Some(selection) = app.session.selection() {
                    draw_markers(ui, selection, &geometry, rect);
                }
            }
            _ => show_placeholder(ui),
        }

        if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
            draw_drop_hint(ui, rect);
        }
    });
}

/// Pointer row relative to the top of the canvas.
fn canvas_y(rect: egui::Rect, pos: egui::Pos2) -> f64 {
    (pos.y - rect.top()) as f64
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut BandcutApp, rect: egui::Rect) {
    let mut changed = false;

    if response.hovered() && ui.input(|i| i.pointer.primary_pressed()) {
        if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
            changed |= app.session.pointer_pressed(canvas_y(rect, pos));
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            changed |= app.session.pointer_dragged(canvas_y(rect, pos));
        }
    }

    if ui.input(|i| i.pointer.primary_released()) {
        changed |= app.session.pointer_released();
    }

    if changed {
        ui.ctx().request_repaint();
    }
}

fn update_cursor(ui: &egui::Ui, response: &egui::Response, app: &BandcutApp, rect: egui::Rect) {
    let (Some(selection), Some(geometry)) = (app.session.selection(), app.session.geometry())
    else {
        return;
    };
    if selection.dragging().is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeVertical);
        return;
    }
    if selection.state() != SelectionState::BothSet {
        return;
    }
    let Some(pos) = response.hover_pos() else {
        return;
    };
    let image_y = geometry.to_image_space(canvas_y(rect, pos));
    let tolerance = geometry.to_image_distance(MARKER_HIT_TOLERANCE);
    if selection.marker_at(image_y, tolerance).is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeVertical);
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// The image sits at the left edge, pushed down by the top padding.
fn image_rect(rect: egui::Rect, geometry: &DisplayGeometry) -> egui::Rect {
    egui::Rect::from_min_size(
        rect.left_top() + egui::vec2(0.0, geometry.top_padding as f32),
        egui::vec2(
            geometry.display_width() as f32,
            geometry.display_height() as f32,
        ),
    )
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_markers(ui: &egui::Ui, selection: &Selection, geometry: &DisplayGeometry, rect: egui::Rect) {
    let markers = [
        (selection.start_y(), START_MARKER_COLOR),
        (selection.end_y(), END_MARKER_COLOR),
    ];
    let right = rect.left() + geometry.display_width() as f32;

    for (image_y, color) in markers {
        let Some(image_y) = image_y else {
            continue;
        };
        let y = rect.top() + geometry.to_display_space(image_y) as f32;
        ui.painter().extend(egui::Shape::dashed_line(
            &[egui::pos2(rect.left(), y), egui::pos2(right, y)],
            egui::Stroke::new(MARKER_WIDTH, color),
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }
}

fn draw_drop_hint(ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Drop image to open",
        egui::FontId::proportional(18.0),
        egui::Color32::from_white_alpha(220),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
