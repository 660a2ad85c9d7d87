use chart_viewport::ChartError;
use chart_viewport::api::{
    VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1, ViewportEngine, ViewportEngineConfig, ViewportSnapshot,
};
use chart_viewport::core::{
    DataPoint, NamedRange, SeriesDescriptor, SeriesStyle, TimeWindow, YDomain,
};

fn config() -> ViewportEngineConfig {
    ViewportEngineConfig::new(
        vec![
            SeriesDescriptor::new("portfolio", "Portfolio", "#16a34a", SeriesStyle::Area),
            SeriesDescriptor::new("sp500", "S&P 500", "#64748b", SeriesStyle::Dashed),
        ],
        "portfolio",
    )
    .with_default_range(NamedRange::ThreeYears)
    .with_initial_visible_series(["portfolio"])
}

fn engine() -> ViewportEngine {
    ViewportEngine::with_data(
        config(),
        vec![
            DataPoint::new(0)
                .with_value("portfolio", 100.0)
                .with_value("sp500", 100.0),
            DataPoint::new(1)
                .with_value("portfolio", 110.0)
                .with_value("sp500", 105.0),
            DataPoint::new(2)
                .with_value("portfolio", 121.0)
                .with_value("sp500", 99.0),
        ],
    )
    .expect("engine init")
}

#[test]
fn engine_config_json_roundtrip() {
    let config = config();
    let json = config.to_json_pretty().expect("config should serialize");
    let restored = ViewportEngineConfig::from_json_str(&json).expect("config should parse");

    assert_eq!(restored, config);
}

#[test]
fn config_json_defaults_optional_fields() {
    let json = r##"{
        "series": [
            { "id": "portfolio", "label": "Portfolio", "color": "#16a34a", "style": "area" }
        ],
        "primary_series": "portfolio"
    }"##;
    let config = ViewportEngineConfig::from_json_str(json).expect("config should parse");

    assert_eq!(config.default_range, NamedRange::OneYear);
    assert!(config.initial_visible_series.is_none());
}

#[test]
fn malformed_config_json_is_reported() {
    let err = ViewportEngineConfig::from_json_str("{\"series\": 3}");
    assert!(matches!(err, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn snapshot_reports_renderer_outputs() {
    let snapshot = engine().snapshot();

    assert_eq!(snapshot.data_revision, 1);
    assert_eq!(snapshot.points_len, 3);
    assert_eq!(snapshot.named_range, Some(NamedRange::ThreeYears));
    assert_eq!(snapshot.range_label, "3Y");
    assert_eq!(snapshot.window.map(|w| w.right_ms), Some(2));
    assert_eq!(snapshot.visible_series.len(), 1);
    assert_eq!(
        snapshot.y_domain,
        YDomain::Fixed {
            min: 99.0,
            max: 122.0
        }
    );
    assert_eq!(snapshot.window_return_pct, 21.0);
    assert!(!snapshot.can_pan_back);
    assert!(!snapshot.can_pan_forward);
    assert!(!snapshot.axis_ticks.is_empty());
}

#[test]
fn snapshot_json_contract_roundtrip() {
    let mut engine = engine();
    engine.begin_drag_selection(0);
    engine.update_drag_selection(1);
    engine.commit_drag_selection();
    engine.begin_drag_selection(1);

    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("snapshot should serialize");
    assert!(json.contains(&format!(
        "\"schema_version\": {VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1}"
    )));

    let restored = ViewportSnapshot::from_json_compat_str(&json).expect("snapshot should parse");
    assert_eq!(restored, engine.snapshot());
    assert_eq!(restored.window, Some(TimeWindow::new(0, 1)));
    assert!(restored.drag_selection.is_some());
    assert!(restored.zoom_history.is_some());
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = engine().snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize");

    let restored = ViewportSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn unsupported_snapshot_schema_is_rejected() {
    let snapshot = engine().snapshot();
    let json = serde_json::json!({
        "schema_version": 99,
        "snapshot": snapshot,
    })
    .to_string();

    let err = ViewportSnapshot::from_json_compat_str(&json);
    assert!(matches!(err, Err(ChartError::InvalidData(_))));
}
