/// Default minimum zoom factor (image pixels to canvas pixels).
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;

/// Default maximum zoom factor.
pub const DEFAULT_MAX_ZOOM: f32 = 10.0;

/// Damping applied to raw gesture zoom factors. A raw factor of 1.3 becomes
/// a multiplicative change of 1 + 0.3 * damping, smoothing gesture jitter.
pub const DEFAULT_ZOOM_DAMPING: f32 = 0.5;

/// Target pixel budget for the LOW LOD tier.
pub const LOD_LOW_TARGET_PIXELS: u64 = 3_000_000;

/// Target pixel budget for the MEDIUM LOD tier.
pub const LOD_MEDIUM_TARGET_PIXELS: u64 = 6_000_000;

/// Target pixel budget for the HIGH LOD tier.
pub const LOD_HIGH_TARGET_PIXELS: u64 = 9_000_000;

/// Zoom factors at or below this select the LOW tier.
pub const LOD_LOW_MAX_SCALE: f32 = 0.5;

/// Zoom factors at or below this (and above the LOW cutoff) select the
/// MEDIUM tier; anything higher selects HIGH.
pub const LOD_MEDIUM_MAX_SCALE: f32 = 1.5;
