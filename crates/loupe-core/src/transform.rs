//! Affine mapping between canvas space and image space.
//!
//! The transform is `screen = image * scale + offset` with a uniform scale.
//! Image space is always the source's native pixel grid, so a LOD tier
//! switch never touches `scale` or `offset` and the on-screen image stays
//! continuous across the switch.

use crate::bitmap::PixelSize;
use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

/// A point or delta in canvas/image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Inclusive zoom factor bounds enforced on every gesture update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

/// View transform state: zoom factor plus canvas-space position of the
/// image origin.
///
/// Canvas and image sizes are owned by the caller; the transform keeps the
/// last-seen values so pan containment can be re-applied after every
/// mutation (the containment bounds depend on the current scale).
#[derive(Clone, Debug)]
pub struct ViewTransform {
    scale: f32,
    offset: Vec2,
    bounds: ZoomBounds,
    damping: f32,
    canvas_size: Vec2,
    image_size: Vec2,
}

impl ViewTransform {
    pub fn new(bounds: ZoomBounds, damping: f32) -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::default(),
            bounds,
            damping,
            canvas_size: Vec2::default(),
            image_size: Vec2::default(),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Fit the image inside the canvas, preserving aspect ratio, and center
    /// it on both axes.
    ///
    /// The fit scale is deliberately not clamped to the zoom bounds: a very
    /// small image may legitimately need a scale above the gesture maximum
    /// to fill the canvas. Gesture updates re-enter the bounds on first use.
    pub fn fit_to_canvas(&mut self, image: PixelSize, canvas: Vec2) {
        self.image_size = Vec2::new(image.width as f32, image.height as f32);
        self.canvas_size = canvas;

        let scale_x = canvas.x / self.image_size.x;
        let scale_y = canvas.y / self.image_size.y;
        self.scale = scale_x.min(scale_y);

        self.offset = Vec2::new(
            (canvas.x - self.image_size.x * self.scale) / 2.0,
            (canvas.y - self.image_size.y * self.scale) / 2.0,
        );
    }

    /// Apply a damped, pivot-preserving zoom gesture.
    ///
    /// The image-space point under `pivot` stays under `pivot` after the
    /// update (when containment does not clamp the result). Degenerate
    /// gesture factors are sanitized, never rejected: zero and negative
    /// factors pull the scale toward the minimum zoom, non-finite factors
    /// are ignored.
    pub fn apply_pinch_zoom(&mut self, gesture_factor: f32, pivot: Vec2) {
        if !gesture_factor.is_finite() {
            return;
        }
        let target = self.scale * (1.0 + (gesture_factor - 1.0) * self.damping);
        self.rescale_around(target, pivot);
    }

    /// Set an absolute zoom factor, pivot-preserving and clamped to bounds.
    /// Used for manual zoom presets; no damping is applied.
    pub fn set_scale(&mut self, target: f32, pivot: Vec2) {
        if !target.is_finite() {
            return;
        }
        self.rescale_around(target, pivot);
    }

    fn rescale_around(&mut self, target: f32, pivot: Vec2) {
        // Image-space pivot must be computed against the pre-zoom transform.
        let pivot_image = self.screen_to_image(pivot);
        let new_scale = target.clamp(self.bounds.min, self.bounds.max);

        self.scale = new_scale;
        self.offset = Vec2::new(
            pivot.x - pivot_image.x * new_scale,
            pivot.y - pivot_image.y * new_scale,
        );
        self.constrain();
    }

    /// Translate the view by a canvas-space delta. Non-finite deltas from
    /// gesture hardware are dropped.
    pub fn apply_pan(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.offset.x += delta.x;
        self.offset.y += delta.y;
        self.constrain();
    }

    /// Clamp the offset so the image cannot reveal empty space beyond its
    /// own edges; axes where the scaled image is smaller than the canvas
    /// are centered instead.
    pub fn constrain_pan(&mut self, canvas: Vec2, image: PixelSize) {
        self.canvas_size = canvas;
        self.image_size = Vec2::new(image.width as f32, image.height as f32);
        self.constrain();
    }

    fn constrain(&mut self) {
        if self.image_size.x <= 0.0 || self.canvas_size.x <= 0.0 {
            return;
        }

        self.offset.x =
            constrain_axis(self.offset.x, self.image_size.x * self.scale, self.canvas_size.x);
        self.offset.y =
            constrain_axis(self.offset.y, self.image_size.y * self.scale, self.canvas_size.y);
    }

    /// Canvas point to image point. Inverse of [`Self::image_to_screen`].
    pub fn screen_to_image(&self, p: Vec2) -> Vec2 {
        Vec2::new((p.x - self.offset.x) / self.scale, (p.y - self.offset.y) / self.scale)
    }

    /// Image point to canvas point. Inverse of [`Self::screen_to_image`].
    pub fn image_to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y)
    }
}

fn constrain_axis(offset: f32, scaled: f32, canvas: f32) -> f32 {
    if scaled < canvas {
        (canvas - scaled) / 2.0
    } else {
        offset.clamp(canvas - scaled, 0.0)
    }
}
