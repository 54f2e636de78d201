//! Level-of-detail tiers of a loaded image.
//!
//! Three resolution tiers are resampled eagerly on load, so a later zoom
//! change only swaps a reference and never resizes mid-interaction.

use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bitmap::{Bitmap, PixelSize};
use crate::consts::{
    LOD_HIGH_TARGET_PIXELS, LOD_LOW_MAX_SCALE, LOD_LOW_TARGET_PIXELS, LOD_MEDIUM_MAX_SCALE,
    LOD_MEDIUM_TARGET_PIXELS,
};
use crate::error::{LoupeError, Result};

/// Resolution tier identifier, ordered coarse to fine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LodLevel {
    Low,
    Medium,
    High,
}

impl LodLevel {
    pub const ALL: [LodLevel; 3] = [LodLevel::Low, LodLevel::Medium, LodLevel::High];

    /// Tier selection policy. Single cutoffs, no hysteresis.
    pub fn for_scale(scale: f32) -> LodLevel {
        if scale <= LOD_LOW_MAX_SCALE {
            LodLevel::Low
        } else if scale <= LOD_MEDIUM_MAX_SCALE {
            LodLevel::Medium
        } else {
            LodLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LodLevel::Low => "low",
            LodLevel::Medium => "medium",
            LodLevel::High => "high",
        }
    }
}

/// Target pixel counts per tier, passed in at construction so the policy is
/// testable with synthetic budgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LodBudgets {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
}

impl Default for LodBudgets {
    fn default() -> Self {
        Self {
            low: LOD_LOW_TARGET_PIXELS,
            medium: LOD_MEDIUM_TARGET_PIXELS,
            high: LOD_HIGH_TARGET_PIXELS,
        }
    }
}

impl LodBudgets {
    pub fn target_pixels(&self, level: LodLevel) -> u64 {
        match level {
            LodLevel::Low => self.low,
            LodLevel::Medium => self.medium,
            LodLevel::High => self.high,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.low == 0 {
            return Err(LoupeError::InvalidConfig(
                "LOD budgets must be non-zero".into(),
            ));
        }
        if !(self.low <= self.medium && self.medium <= self.high) {
            return Err(LoupeError::InvalidConfig(format!(
                "LOD budgets must be non-decreasing (got {} / {} / {})",
                self.low, self.medium, self.high
            )));
        }
        Ok(())
    }
}

struct LodTiers {
    low: Bitmap,
    medium: Bitmap,
    high: Bitmap,
    native_size: PixelSize,
}

impl LodTiers {
    fn get(&self, level: LodLevel) -> &Bitmap {
        match level {
            LodLevel::Low => &self.low,
            LodLevel::Medium => &self.medium,
            LodLevel::High => &self.high,
        }
    }
}

/// Owns the precomputed resolution tiers of the loaded image and tracks
/// which one is active for rendering.
pub struct LodStore {
    budgets: LodBudgets,
    tiers: Option<LodTiers>,
    current_level: LodLevel,
}

impl LodStore {
    pub fn new(budgets: LodBudgets) -> Self {
        Self {
            budgets,
            tiers: None,
            current_level: LodLevel::Low,
        }
    }

    /// Resample all three tiers from `source` and reset the active tier to
    /// LOW. Replaces any previously loaded tiers wholesale.
    ///
    /// Synchronous and proportional to the source pixel count; callers that
    /// care about open latency should invoke this off their interaction
    /// thread. The three resamples run in parallel internally.
    pub fn load(&mut self, source: &Bitmap) -> Result<()> {
        let budgets = self.budgets;
        let ((low, medium), high) = rayon::join(
            || {
                rayon::join(
                    || generate_tier(source, budgets.low),
                    || generate_tier(source, budgets.medium),
                )
            },
            || generate_tier(source, budgets.high),
        );
        let (low, medium, high) = (low?, medium?, high?);

        info!(
            "LOD tiers ready: low {}x{}, medium {}x{}, high {}x{} (source {}x{})",
            low.width(),
            low.height(),
            medium.width(),
            medium.height(),
            high.width(),
            high.height(),
            source.width(),
            source.height()
        );

        self.tiers = Some(LodTiers {
            low,
            medium,
            high,
            native_size: source.size(),
        });
        self.current_level = LodLevel::Low;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.tiers.is_some()
    }

    /// Switch the active tier. Returns `true` if the tier actually changed,
    /// signalling the caller to rebuild any derived resource (for example a
    /// GPU texture) bound to the previous tier's pixel buffer.
    pub fn select_level(&mut self, target: LodLevel) -> bool {
        if target == self.current_level {
            return false;
        }
        debug!("LOD switch: {} -> {}", self.current_level.label(), target.label());
        self.current_level = target;
        true
    }

    pub fn current_level(&self) -> LodLevel {
        self.current_level
    }

    pub fn current_image(&self) -> Result<&Bitmap> {
        self.tiers
            .as_ref()
            .map(|t| t.get(self.current_level))
            .ok_or(LoupeError::NotLoaded("current_image"))
    }

    pub fn size_of(&self, level: LodLevel) -> Result<PixelSize> {
        self.tiers
            .as_ref()
            .map(|t| t.get(level).size())
            .ok_or(LoupeError::NotLoaded("size_of"))
    }

    /// Full-resolution size of the source image, the canonical image size
    /// the view transform works in.
    pub fn native_size(&self) -> Result<PixelSize> {
        self.tiers
            .as_ref()
            .map(|t| t.native_size)
            .ok_or(LoupeError::NotLoaded("native_size"))
    }
}

/// Resample one tier down to at most `target_px` pixels.
///
/// The linear resize factor is `sqrt(target / source)`; a source already
/// within budget is returned unchanged (tiers are never upsampled past the
/// source's native resolution).
fn generate_tier(source: &Bitmap, target_px: u64) -> Result<Bitmap> {
    let source_px = source.pixel_count();
    let resize_factor = (target_px as f64 / source_px as f64).sqrt();
    if resize_factor >= 1.0 {
        return Ok(source.clone());
    }

    let new_width = (source.width() as f64 * resize_factor).ceil() as u32;
    let new_height =
        (new_width as f64 * source.height() as f64 / source.width() as f64).round() as u32;
    if new_width == 0 || new_height == 0 {
        return Err(LoupeError::TierGeneration(format!(
            "degenerate tier size {new_width}x{new_height} for budget {target_px}"
        )));
    }

    let resized = imageops::resize(source.as_rgba(), new_width, new_height, FilterType::Lanczos3);
    debug!(
        "resampled tier to {new_width}x{new_height} (factor {resize_factor:.3}, budget {target_px})"
    );
    Ok(Bitmap::from_rgba(resized))
}
