use loupe_core::transform::Vec2;

use crate::app::LoupeApp;
use crate::state::{zoom_preset_value, ZOOM_PRESET_NAMES};

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(size) = app.controller.native_size() {
                ui.label(format!("{}x{}", size.width, size.height));
                ui.separator();
                ui.label(format!(
                    "Tier: {}",
                    app.controller.store().current_level().label()
                ));
                ui.separator();
            }
            ui.label(format!(
                "Zoom: {:.0}%",
                app.controller.transform().scale() * 100.0
            ));
            ui.separator();
            zoom_preset_combo(ctx, ui, app);
        });

        ui.add_space(2.0);
    });
}

fn zoom_preset_combo(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut LoupeApp) {
    egui::ComboBox::from_id_salt("zoom_preset")
        .selected_text("Preset")
        .show_ui(ui, |ui| {
            for (index, name) in ZOOM_PRESET_NAMES.iter().enumerate() {
                if ui.selectable_label(false, *name).clicked() {
                    let center = app.viewport.last_canvas / 2.0;
                    let events = app
                        .controller
                        .set_zoom(zoom_preset_value(index), Vec2::new(center.x, center.y));
                    app.apply_events(ctx, events);
                }
            }
        });
}
