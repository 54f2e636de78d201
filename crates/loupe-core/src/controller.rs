//! Glue between the view transform, the LOD store, and the windowing layer.
//!
//! The windowing layer feeds raw interaction events into the handler
//! methods; each returns a [`ViewEvents`] describing what the caller must
//! do next (redraw, rebuild the tier texture, update the zoom display).

use tracing::info;

use crate::bitmap::{Bitmap, PixelSize};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::lod::{LodLevel, LodStore};
use crate::transform::{Vec2, ViewTransform};

/// Outcome of one interaction event.
///
/// `tier_switched` means the active LOD tier changed and any GPU resource
/// derived from the previous tier's pixel buffer must be rebuilt before the
/// next draw. `zoom_changed` carries the new scale for the zoom observer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewEvents {
    pub redraw: bool,
    pub tier_switched: bool,
    pub zoom_changed: Option<f32>,
}

/// Composes the transform and the LOD store and sequences them per event.
pub struct ViewController {
    transform: ViewTransform,
    store: LodStore,
    canvas_size: Vec2,
}

impl ViewController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            transform: ViewTransform::new(config.zoom.bounds(), config.zoom.damping),
            store: LodStore::new(config.lod),
            canvas_size: Vec2::default(),
        }
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn store(&self) -> &LodStore {
        &self.store
    }

    pub fn has_image(&self) -> bool {
        self.store.is_loaded()
    }

    /// Native size of the loaded source, if any. This is the image size the
    /// renderer should scale by the transform, regardless of which tier's
    /// pixels are being drawn.
    pub fn native_size(&self) -> Option<PixelSize> {
        self.store.native_size().ok()
    }

    /// Load a new source image: build the LOD tiers, fit the view to the
    /// canvas against the source's native size (so a scale of 1.0 means one
    /// source pixel per screen pixel), then apply the tier policy.
    pub fn on_load_image(&mut self, source: &Bitmap) -> Result<ViewEvents> {
        self.store.load(source)?;
        let native = self.store.native_size()?;

        if self.has_valid_canvas() {
            self.transform.fit_to_canvas(native, self.canvas_size);
        }
        let scale = self.transform.scale();
        self.sync_lod();
        info!(
            "image loaded: {}x{}, fit scale {:.3}, tier {}",
            native.width,
            native.height,
            scale,
            self.store.current_level().label()
        );

        // A fresh load always invalidates the renderer's texture, even when
        // the tier level happens to match the previous image's.
        Ok(ViewEvents {
            redraw: true,
            tier_switched: true,
            zoom_changed: Some(scale),
        })
    }

    /// Pinch/scroll zoom gesture around a canvas-space pivot.
    pub fn on_zoom_gesture(&mut self, gesture_factor: f32, pivot: Vec2) -> ViewEvents {
        if !self.has_image() {
            return ViewEvents::default();
        }
        let before = self.transform.scale();
        self.transform.apply_pinch_zoom(gesture_factor, pivot);
        self.after_scale_change(before)
    }

    /// Pan gesture or drag delta in canvas space.
    pub fn on_pan_gesture(&mut self, delta: Vec2) -> ViewEvents {
        if !self.has_image() {
            return ViewEvents::default();
        }
        self.transform.apply_pan(delta);
        ViewEvents {
            redraw: true,
            ..ViewEvents::default()
        }
    }

    /// Canvas resize. The view is refit wholesale, as on load. Transient
    /// degenerate sizes (0x0 during window creation) are ignored.
    pub fn on_resize(&mut self, canvas: Vec2) -> ViewEvents {
        if !(canvas.x > 0.0 && canvas.y > 0.0) {
            return ViewEvents::default();
        }
        self.canvas_size = canvas;

        let Ok(native) = self.store.native_size() else {
            return ViewEvents::default();
        };
        let before = self.transform.scale();
        self.transform.fit_to_canvas(native, canvas);
        self.after_scale_change(before)
    }

    /// Absolute zoom level (manual preset), pivot-preserving.
    pub fn set_zoom(&mut self, scale: f32, pivot: Vec2) -> ViewEvents {
        if !self.has_image() {
            return ViewEvents::default();
        }
        let before = self.transform.scale();
        self.transform.set_scale(scale, pivot);
        self.after_scale_change(before)
    }

    /// Refit the loaded image to the current canvas on demand.
    pub fn fit_to_canvas(&mut self) -> ViewEvents {
        let Ok(native) = self.store.native_size() else {
            return ViewEvents::default();
        };
        if !self.has_valid_canvas() {
            return ViewEvents::default();
        }
        let before = self.transform.scale();
        self.transform.fit_to_canvas(native, self.canvas_size);
        self.after_scale_change(before)
    }

    fn has_valid_canvas(&self) -> bool {
        self.canvas_size.x > 0.0 && self.canvas_size.y > 0.0
    }

    fn after_scale_change(&mut self, before: f32) -> ViewEvents {
        if !self.has_image() {
            return ViewEvents::default();
        }
        let scale = self.transform.scale();
        let tier_switched = self.sync_lod();
        ViewEvents {
            redraw: true,
            tier_switched,
            zoom_changed: (scale != before).then_some(scale),
        }
    }

    fn sync_lod(&mut self) -> bool {
        if !self.store.is_loaded() {
            return false;
        }
        self.store.select_level(LodLevel::for_scale(self.transform.scale()))
    }
}
