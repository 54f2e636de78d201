use loupe_core::config::{ViewerConfig, ZoomConfig};
use loupe_core::lod::LodBudgets;

#[test]
fn test_default_config_is_valid() {
    ViewerConfig::default().validate().unwrap();
}

#[test]
fn test_toml_round_trip() {
    let config = ViewerConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: ViewerConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let parsed: ViewerConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, ViewerConfig::default());
}

#[test]
fn test_partial_toml_keeps_default_budgets() {
    let parsed: ViewerConfig = toml::from_str(
        r#"
        [zoom]
        min = 0.2
        max = 5.0
        damping = 0.4
        "#,
    )
    .unwrap();

    assert_eq!(
        parsed.zoom,
        ZoomConfig {
            min: 0.2,
            max: 5.0,
            damping: 0.4
        }
    );
    assert_eq!(parsed.lod, LodBudgets::default());
}

#[test]
fn test_inverted_zoom_bounds_rejected() {
    let config = ViewerConfig {
        zoom: ZoomConfig {
            min: 5.0,
            max: 1.0,
            damping: 0.5,
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_out_of_range_damping_rejected() {
    for damping in [0.0, -0.5, 1.5] {
        let config = ViewerConfig {
            zoom: ZoomConfig {
                min: 0.1,
                max: 10.0,
                damping,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err(), "damping {damping} should be rejected");
    }
}

#[test]
fn test_decreasing_lod_budgets_rejected() {
    let config = ViewerConfig {
        lod: LodBudgets {
            low: 9_000_000,
            medium: 6_000_000,
            high: 3_000_000,
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
