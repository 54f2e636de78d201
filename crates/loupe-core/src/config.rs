use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_DAMPING};
use crate::error::{LoupeError, Result};
use crate::lod::LodBudgets;
use crate::transform::ZoomBounds;

/// Viewer configuration, importable/exportable as TOML.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub lod: LodBudgets,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            lod: LodBudgets::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        self.zoom.validate()?;
        self.lod.validate()
    }
}

/// Zoom bounds and gesture damping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub min: f32,
    pub max: f32,
    pub damping: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
            damping: DEFAULT_ZOOM_DAMPING,
        }
    }
}

impl ZoomConfig {
    pub fn bounds(&self) -> ZoomBounds {
        ZoomBounds {
            min: self.min,
            max: self.max,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min <= 0.0 {
            return Err(LoupeError::InvalidConfig(format!(
                "zoom bounds must be positive and finite (got {}..{})",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(LoupeError::InvalidConfig(format!(
                "min zoom {} must be below max zoom {}",
                self.min, self.max
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(LoupeError::InvalidConfig(format!(
                "zoom damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        Ok(())
    }
}
