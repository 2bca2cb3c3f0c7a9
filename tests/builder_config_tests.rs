use iwi_chart::ChartError;
use iwi_chart::api::{
    AxisRangeStrategy, BuilderConfig, ChartVariant, OverlayLayout, StackingStrategy,
};
use iwi_chart::core::AveragingStrategy;

#[test]
fn variant_presets_enumerate_divergence_points() {
    let stacked = BuilderConfig::for_variant(ChartVariant::Stacked);
    assert_eq!(stacked.axis_range, AxisRangeStrategy::DataLengthTimesStep);
    assert_eq!(stacked.stacking, StackingStrategy::PerEntity);
    assert_eq!(stacked.averaging, AveragingStrategy::SimpleMean);

    let overlapped = BuilderConfig::for_variant(ChartVariant::Overlapped);
    assert_eq!(overlapped.axis_range, AxisRangeStrategy::FixedInterval);
    assert_eq!(overlapped.stacking, StackingStrategy::Unstacked);
    assert_eq!(overlapped.averaging, AveragingStrategy::ChannelPair);

    for config in [stacked, overlapped] {
        assert_eq!(config.x_step, 10.0);
        assert_eq!(config.y_interval, 25.0);
        assert!(config.legend_lists_entities);
        assert_eq!(config.overlay, OverlayLayout::default());
    }
}

#[test]
fn default_config_is_stacked_preset() {
    assert_eq!(
        BuilderConfig::default(),
        BuilderConfig::for_variant(ChartVariant::Stacked)
    );
}

#[test]
fn variant_parses_from_names() {
    assert_eq!("stacked".parse::<ChartVariant>().ok(), Some(ChartVariant::Stacked));
    assert_eq!(
        " Overlapped ".parse::<ChartVariant>().ok(),
        Some(ChartVariant::Overlapped)
    );
    assert_eq!("b".parse::<ChartVariant>().ok(), Some(ChartVariant::Overlapped));

    let err = "pie".parse::<ChartVariant>().expect_err("unknown variant");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
    assert!(format!("{err}").contains("pie"));
}

#[test]
fn config_json_roundtrip_and_partial_input() {
    let config = BuilderConfig::for_variant(ChartVariant::Overlapped).with_x_step(5.0);
    let json = config.to_json_pretty().expect("serialize");
    let restored = BuilderConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);

    let partial = BuilderConfig::from_json_str(
        r#"{ "stacking": "unstacked", "averaging": "channel_pair", "overlay": { "base_top": 120.0 } }"#,
    )
    .expect("partial config");
    assert_eq!(partial.stacking, StackingStrategy::Unstacked);
    assert_eq!(partial.averaging, AveragingStrategy::ChannelPair);
    assert_eq!(partial.axis_range, AxisRangeStrategy::DataLengthTimesStep);
    assert_eq!(partial.overlay.base_top, 120.0);
    assert_eq!(partial.overlay.line_step, 20.0);

    assert_eq!(
        BuilderConfig::from_json_str("{}").expect("empty config"),
        BuilderConfig::default()
    );
}

#[test]
fn config_json_rejects_unknown_strategy() {
    let err = BuilderConfig::from_json_str(r#"{ "stacking": "sideways" }"#)
        .expect_err("unknown strategy");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn config_validation_rejects_non_positive_steps() {
    assert!(BuilderConfig::default().validate().is_ok());

    let err = BuilderConfig::default()
        .with_x_step(0.0)
        .validate()
        .expect_err("zero step");
    assert!(format!("{err}").contains("x_step"));

    let err = BuilderConfig::default()
        .with_y_interval(f64::NAN)
        .validate()
        .expect_err("nan interval");
    assert!(format!("{err}").contains("y_interval"));

    let err = BuilderConfig::default()
        .with_overlay_layout(OverlayLayout {
            base_top: f64::INFINITY,
            ..OverlayLayout::default()
        })
        .validate()
        .expect_err("infinite top");
    assert!(format!("{err}").contains("overlay.base_top"));
}

#[test]
fn overlay_layout_top_for_steps_linearly() {
    let layout = OverlayLayout::default();
    assert_eq!(layout.top_for(0), 250.0);
    assert_eq!(layout.top_for(3), 310.0);
}
