use std::path::PathBuf;

pub const ZOOM_PRESET_NAMES: &[&str] = &["10%", "25%", "50%", "100%", "200%", "400%"];

/// Return the zoom factor for the given preset index.
pub fn zoom_preset_value(index: usize) -> f32 {
    match index {
        0 => 0.1,
        1 => 0.25,
        2 => 0.5,
        4 => 2.0,
        5 => 4.0,
        _ => 1.0,
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Canvas size last reported to the controller, to detect resizes.
    pub last_canvas: egui::Vec2,
    pub viewing_label: String,
}
