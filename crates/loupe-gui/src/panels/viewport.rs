use loupe_core::transform::Vec2;

use crate::app::LoupeApp;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        sync_canvas(ctx, app, rect);

        let texture_id = match app.viewport.texture.as_ref() {
            Some(t) => t.id(),
            None => {
                show_placeholder(ui);
                return;
            }
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        handle_zoom(ui, &response, ctx, app, rect);
        handle_pan(&response, ctx, app);

        if response.double_clicked() {
            let events = app.controller.fit_to_canvas();
            app.apply_events(ctx, events);
        }

        draw_image(ui, texture_id, rect, app);
        draw_viewing_label(ui, rect, &app.viewport.viewing_label);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Report the panel size to the controller when it changes. The first report
/// arrives before any image is loaded, so the fit on load sees a real canvas.
fn sync_canvas(ctx: &egui::Context, app: &mut LoupeApp, rect: egui::Rect) {
    let size = rect.size();
    if app.viewport.last_canvas == size {
        return;
    }
    app.viewport.last_canvas = size;
    let events = app.controller.on_resize(Vec2::new(size.x, size.y));
    app.apply_events(ctx, events);
}

fn handle_zoom(
    ui: &egui::Ui,
    response: &egui::Response,
    ctx: &egui::Context,
    app: &mut LoupeApp,
    rect: egui::Rect,
) {
    if !response.hovered() {
        return;
    }

    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    let pinch = ui.input(|i| i.zoom_delta());

    let gesture_factor = if pinch != 1.0 {
        pinch
    } else if scroll_delta != 0.0 {
        (scroll_delta * 0.005).exp()
    } else {
        return;
    };

    let pivot = ui
        .input(|i| i.pointer.hover_pos())
        .unwrap_or_else(|| rect.center());
    let pivot = Vec2::new(pivot.x - rect.min.x, pivot.y - rect.min.y);

    let events = app.controller.on_zoom_gesture(gesture_factor, pivot);
    app.apply_events(ctx, events);
}

fn handle_pan(response: &egui::Response, ctx: &egui::Context, app: &mut LoupeApp) {
    if !(response.dragged_by(egui::PointerButton::Primary)
        || response.dragged_by(egui::PointerButton::Middle))
    {
        return;
    }
    let delta = response.drag_delta();
    if delta == egui::Vec2::ZERO {
        return;
    }
    let events = app.controller.on_pan_gesture(Vec2::new(delta.x, delta.y));
    app.apply_events(ctx, events);
}

/// Stretch the active tier over the native-size rect placed by the
/// transform. Tier switches swap the texture without moving this rect.
fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, rect: egui::Rect, app: &LoupeApp) {
    let Some(native) = app.controller.native_size() else {
        return;
    };
    let transform = app.controller.transform();
    let scale = transform.scale();
    let offset = transform.offset();

    let img_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(offset.x, offset.y),
        egui::vec2(native.width as f32 * scale, native.height as f32 * scale),
    );

    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
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
