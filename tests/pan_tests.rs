use chart_viewport::api::{ViewportEngine, ViewportEngineConfig};
use chart_viewport::core::{DataPoint, NamedRange, SeriesDescriptor, SeriesStyle, TimeWindow};
use chart_viewport::interaction::PanDirection;

fn build_engine() -> ViewportEngine {
    let config = ViewportEngineConfig::new(
        vec![SeriesDescriptor::new(
            "portfolio",
            "Portfolio",
            "#16a34a",
            SeriesStyle::Line,
        )],
        "portfolio",
    );
    let points = (0..=100)
        .map(|t| DataPoint::new(t).with_value("portfolio", 100.0))
        .collect();
    ViewportEngine::with_data(config, points).expect("engine init")
}

fn zoom_to(engine: &mut ViewportEngine, left_ms: i64, right_ms: i64) {
    engine.begin_drag_selection(left_ms);
    engine.update_drag_selection(right_ms);
    assert!(engine.commit_drag_selection());
}

#[test]
fn pan_shifts_by_full_window_duration() {
    let mut engine = build_engine();
    zoom_to(&mut engine, 40, 60);

    assert!(engine.pan_period(PanDirection::Back));
    assert_eq!(engine.resolve_window(), Some(TimeWindow::new(20, 40)));

    assert!(engine.pan_period(PanDirection::Forward));
    assert!(engine.pan_period(PanDirection::Forward));
    assert_eq!(engine.resolve_window(), Some(TimeWindow::new(60, 80)));
}

#[test]
fn pan_clamps_to_edges_preserving_duration() {
    let mut engine = build_engine();

    zoom_to(&mut engine, 65, 90);
    assert!(engine.pan_period(PanDirection::Forward));
    assert_eq!(engine.resolve_window(), Some(TimeWindow::new(75, 100)));

    zoom_to(&mut engine, 10, 35);
    assert!(engine.pan_period(PanDirection::Back));
    assert_eq!(engine.resolve_window(), Some(TimeWindow::new(0, 25)));
}

#[test]
fn pan_is_disabled_at_data_edges() {
    let mut engine = build_engine();
    zoom_to(&mut engine, 0, 30);

    assert!(!engine.can_pan(PanDirection::Back));
    assert!(engine.can_pan(PanDirection::Forward));
    assert!(!engine.pan_period(PanDirection::Back));
    assert_eq!(engine.resolve_window(), Some(TimeWindow::new(0, 30)));

    zoom_to(&mut engine, 70, 100);
    assert!(engine.can_pan(PanDirection::Back));
    assert!(!engine.can_pan(PanDirection::Forward));
    assert!(!engine.pan_period(PanDirection::Forward));
}

#[test]
fn pan_is_disabled_while_full_extent_is_visible() {
    let mut engine = build_engine();
    engine.select_named_range(NamedRange::ThreeYears);

    assert!(!engine.can_pan(PanDirection::Back));
    assert!(!engine.can_pan(PanDirection::Forward));
    assert!(!engine.pan_period(PanDirection::Back));
}

#[test]
fn pan_keeps_active_preset_label() {
    const DAY_MS: i64 = 86_400_000;
    let config = ViewportEngineConfig::new(
        vec![SeriesDescriptor::new("p", "P", "#000", SeriesStyle::Line)],
        "p",
    );
    let points = (0..=100)
        .map(|day| DataPoint::new(day * DAY_MS).with_value("p", 1.0))
        .collect();
    let mut engine = ViewportEngine::with_data(config, points).expect("engine init");

    // Last point is 1970-04-11, so one month back starts at 1970-03-11 (day 69).
    assert!(engine.select_named_range(NamedRange::OneMonth));
    assert_eq!(
        engine.resolve_window(),
        Some(TimeWindow::new(69 * DAY_MS, 100 * DAY_MS))
    );
    assert!(!engine.can_pan(PanDirection::Forward));

    assert!(engine.pan_period(PanDirection::Back));
    assert_eq!(
        engine.resolve_window(),
        Some(TimeWindow::new(38 * DAY_MS, 69 * DAY_MS))
    );
    assert_eq!(engine.named_range(), Some(NamedRange::OneMonth));
    assert!(engine.zoom_history().is_none());
}

#[test]
fn pan_without_data_is_noop() {
    let config = ViewportEngineConfig::new(
        vec![SeriesDescriptor::new("p", "P", "#000", SeriesStyle::Line)],
        "p",
    );
    let mut engine = ViewportEngine::new(config).expect("engine init");

    assert!(!engine.can_pan(PanDirection::Forward));
    assert!(!engine.pan_period(PanDirection::Forward));
}

#[test]
fn data_refresh_reanchors_panned_preset() {
    const DAY_MS: i64 = 86_400_000;
    let config = ViewportEngineConfig::new(
        vec![SeriesDescriptor::new("p", "P", "#000", SeriesStyle::Line)],
        "p",
    );
    let daily = |days: i64| -> Vec<DataPoint> {
        (0..=days)
            .map(|day| DataPoint::new(day * DAY_MS).with_value("p", 1.0))
            .collect()
    };
    let mut engine = ViewportEngine::with_data(config, daily(100)).expect("engine init");

    assert!(engine.select_named_range(NamedRange::OneMonth));
    assert!(engine.pan_period(PanDirection::Back));
    assert_eq!(
        engine.resolve_window(),
        Some(TimeWindow::new(38 * DAY_MS, 69 * DAY_MS))
    );

    // 1970-04-21 minus one month is 1970-03-21 (day 79).
    engine.set_data(daily(110));
    assert_eq!(engine.named_range(), Some(NamedRange::OneMonth));
    assert_eq!(
        engine.resolve_window(),
        Some(TimeWindow::new(79 * DAY_MS, 110 * DAY_MS))
    );
}
