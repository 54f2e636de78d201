use loupe_core::bitmap::{Bitmap, ChannelLayout};
use loupe_core::config::ViewerConfig;
use loupe_core::lod::LodBudgets;

/// Build an opaque single-color RGBA bitmap of the given size.
pub fn solid_bitmap(width: u32, height: u32) -> Bitmap {
    let data = vec![128u8; width as usize * height as usize * 4];
    Bitmap::from_raw(data, width, height, ChannelLayout::Rgba).expect("valid bitmap")
}

/// Config with synthetic LOD budgets small enough to exercise resampling
/// on test-sized sources.
#[allow(dead_code)]
pub fn test_config(low: u64, medium: u64, high: u64) -> ViewerConfig {
    let mut config = ViewerConfig::default();
    config.lod = LodBudgets { low, medium, high };
    config
}
