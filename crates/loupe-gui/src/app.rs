use std::sync::mpsc;

use loupe_core::config::ViewerConfig;
use loupe_core::controller::{ViewController, ViewEvents};

use crate::convert::bitmap_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UIState, ViewportState};
use crate::worker;

pub struct LoupeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    result_rx: mpsc::Receiver<WorkerResult>,
    pub config: ViewerConfig,
    pub controller: ViewController,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl LoupeApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());
        let config = ViewerConfig::default();
        let controller = ViewController::new(&config);

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            config,
            controller,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageDecoded { path, bitmap } => {
                    match self.controller.on_load_image(&bitmap) {
                        Ok(events) => {
                            self.ui_state.add_log(format!(
                                "Opened: {} ({}x{})",
                                path.display(),
                                bitmap.width(),
                                bitmap.height()
                            ));
                            self.ui_state.file_path = Some(path);
                            self.apply_events(ctx, events);
                        }
                        Err(e) => {
                            self.ui_state.add_log(format!("ERROR: failed to load image: {e}"));
                        }
                    }
                }
                WorkerResult::ConfigImported { config } => {
                    self.config = config;
                    self.controller = ViewController::new(&self.config);
                    self.viewport.texture = None;
                    self.ui_state.add_log("Config imported".into());

                    // Rebuild the tiers under the new budgets by re-decoding
                    // the current file.
                    if let Some(path) = self.ui_state.file_path.clone() {
                        self.send_command(WorkerCommand::DecodeImage { path });
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// React to controller events: a tier switch invalidates the viewport
    /// texture, any view change schedules a repaint.
    pub fn apply_events(&mut self, ctx: &egui::Context, events: ViewEvents) {
        if events.tier_switched {
            self.refresh_texture(ctx);
        }
        if events.redraw {
            ctx.request_repaint();
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Ok(bitmap) = self.controller.store().current_image() else {
            return;
        };
        let image = bitmap_to_color_image(bitmap);
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.viewing_label =
            format!("Tier: {}", self.controller.store().current_level().label());
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for LoupeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Loupe")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Loupe");
                        ui.label("Image Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
