mod common;

use approx::assert_relative_eq;

use loupe_core::config::ViewerConfig;
use loupe_core::controller::{ViewController, ViewEvents};
use loupe_core::lod::LodLevel;
use loupe_core::transform::Vec2;

#[test]
fn test_load_fits_and_selects_low_tier() {
    let config = common::test_config(30_000, 60_000, 120_000);
    let mut controller = ViewController::new(&config);
    let source = common::solid_bitmap(400, 300);

    controller.on_resize(Vec2::new(80.0, 60.0));
    let events = controller.on_load_image(&source).unwrap();

    assert!(events.redraw);
    assert!(events.tier_switched);
    assert_relative_eq!(events.zoom_changed.unwrap(), 0.2);
    assert_eq!(controller.store().current_level(), LodLevel::Low);
    assert_eq!(controller.native_size().unwrap(), source.size());
}

#[test]
fn test_set_zoom_switches_tiers() {
    let config = common::test_config(30_000, 60_000, 120_000);
    let mut controller = ViewController::new(&config);
    controller.on_resize(Vec2::new(80.0, 60.0));
    controller.on_load_image(&common::solid_bitmap(400, 300)).unwrap();
    let center = Vec2::new(40.0, 30.0);

    let events = controller.set_zoom(1.0, center);
    assert!(events.tier_switched);
    assert_relative_eq!(events.zoom_changed.unwrap(), 1.0);
    assert_eq!(controller.store().current_level(), LodLevel::Medium);

    let events = controller.set_zoom(2.0, center);
    assert!(events.tier_switched);
    assert_eq!(controller.store().current_level(), LodLevel::High);

    // deeper zoom inside the same tier: redraw without a texture rebuild
    let events = controller.set_zoom(2.5, center);
    assert!(events.redraw);
    assert!(!events.tier_switched);
}

#[test]
fn test_resize_refits_view() {
    let config = common::test_config(30_000, 60_000, 120_000);
    let mut controller = ViewController::new(&config);
    controller.on_resize(Vec2::new(80.0, 60.0));
    controller.on_load_image(&common::solid_bitmap(400, 300)).unwrap();

    let events = controller.on_resize(Vec2::new(160.0, 120.0));
    assert_relative_eq!(events.zoom_changed.unwrap(), 0.4);
    assert!(!events.tier_switched);
    assert_eq!(controller.store().current_level(), LodLevel::Low);

    let events = controller.on_resize(Vec2::new(400.0, 300.0));
    assert_relative_eq!(events.zoom_changed.unwrap(), 1.0);
    assert!(events.tier_switched);
    assert_eq!(controller.store().current_level(), LodLevel::Medium);
}

#[test]
fn test_degenerate_resize_ignored() {
    let mut controller = ViewController::new(&ViewerConfig::default());
    assert_eq!(controller.on_resize(Vec2::new(0.0, 0.0)), ViewEvents::default());
    assert_eq!(controller.on_resize(Vec2::new(-5.0, 100.0)), ViewEvents::default());
}

#[test]
fn test_gestures_before_load_are_inert() {
    let mut controller = ViewController::new(&ViewerConfig::default());
    assert!(!controller.has_image());
    assert_eq!(
        controller.on_zoom_gesture(2.0, Vec2::new(10.0, 10.0)),
        ViewEvents::default()
    );
    assert_eq!(
        controller.on_pan_gesture(Vec2::new(5.0, 5.0)),
        ViewEvents::default()
    );
    assert_eq!(controller.fit_to_canvas(), ViewEvents::default());
    assert!(controller.native_size().is_none());
}

#[test]
fn test_zoom_at_bound_reports_no_change() {
    let config = common::test_config(30_000, 60_000, 120_000);
    let mut controller = ViewController::new(&config);
    controller.on_resize(Vec2::new(80.0, 60.0));
    controller.on_load_image(&common::solid_bitmap(400, 300)).unwrap();
    let center = Vec2::new(40.0, 30.0);

    let max = controller.transform().bounds().max;
    controller.set_zoom(max, center);

    let events = controller.set_zoom(max * 2.0, center);
    assert!(events.redraw);
    assert_eq!(events.zoom_changed, None);
}

#[test]
fn test_pan_only_requests_redraw() {
    let config = common::test_config(30_000, 60_000, 120_000);
    let mut controller = ViewController::new(&config);
    controller.on_resize(Vec2::new(80.0, 60.0));
    controller.on_load_image(&common::solid_bitmap(400, 300)).unwrap();

    let events = controller.on_pan_gesture(Vec2::new(-10.0, 4.0));
    assert!(events.redraw);
    assert!(!events.tier_switched);
    assert_eq!(events.zoom_changed, None);
}

#[test]
fn test_fit_to_canvas_restores_fit_scale() {
    let config = common::test_config(30_000, 60_000, 120_000);
    let mut controller = ViewController::new(&config);
    controller.on_resize(Vec2::new(80.0, 60.0));
    controller.on_load_image(&common::solid_bitmap(400, 300)).unwrap();

    controller.set_zoom(2.0, Vec2::new(40.0, 30.0));
    let events = controller.fit_to_canvas();

    assert_relative_eq!(events.zoom_changed.unwrap(), 0.2);
    assert!(events.tier_switched);
    assert_eq!(controller.store().current_level(), LodLevel::Low);
}
