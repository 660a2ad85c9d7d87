use approx::assert_relative_eq;
use chart_viewport::api::{ViewportEngine, ViewportEngineConfig};
use chart_viewport::core::{
    DataPoint, NamedRange, SeriesDescriptor, SeriesStyle, TimeWindow, YDomain,
    compute_axis_ticks, compute_window_return,
};

fn config() -> ViewportEngineConfig {
    ViewportEngineConfig::new(
        vec![
            SeriesDescriptor::new("portfolio", "Portfolio", "#16a34a", SeriesStyle::Area),
            SeriesDescriptor::new("sp500", "S&P 500", "#64748b", SeriesStyle::Dashed),
        ],
        "portfolio",
    )
}

fn compounding_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0).with_value("portfolio", 100.0),
        DataPoint::new(1).with_value("portfolio", 110.0),
        DataPoint::new(2).with_value("portfolio", 121.0),
    ]
}

#[test]
fn full_range_and_drag_zoom_report_window_return() {
    let mut engine =
        ViewportEngine::with_data(config(), compounding_points()).expect("engine init");

    assert!(engine.select_named_range(NamedRange::ThreeYears));
    assert_relative_eq!(engine.window_return(), 21.0, epsilon = 1e-9);

    engine.begin_drag_selection(0);
    engine.update_drag_selection(1);
    assert!(engine.commit_drag_selection());
    assert_relative_eq!(engine.window_return(), 10.0, epsilon = 1e-9);
}

#[test]
fn empty_engine_derivations_fall_back_to_sentinels() {
    let engine = ViewportEngine::new(config()).expect("engine init");

    assert_eq!(engine.y_domain(), YDomain::Auto);
    assert_eq!(compute_axis_ticks(5, 5), vec![5]);
    assert_eq!(engine.window_return(), 0.0);
    assert_eq!(compute_window_return(&[], "portfolio", TimeWindow::new(0, 10)), 0.0);
}

#[test]
fn zero_start_value_returns_zero() {
    let points = vec![
        DataPoint::new(0).with_value("portfolio", 0.0),
        DataPoint::new(1).with_value("portfolio", 50.0),
    ];
    assert_eq!(
        compute_window_return(&points, "portfolio", TimeWindow::new(0, 1)),
        0.0
    );
}

#[test]
fn missing_primary_value_returns_zero() {
    let points = vec![
        DataPoint::new(0).with_value("sp500", 10.0),
        DataPoint::new(1).with_value("portfolio", 50.0),
    ];
    assert_eq!(
        compute_window_return(&points, "portfolio", TimeWindow::new(0, 1)),
        0.0
    );
}

#[test]
fn window_edges_outside_data_fall_back_to_series_ends() {
    let points = compounding_points();

    assert_relative_eq!(
        compute_window_return(&points, "portfolio", TimeWindow::new(-50, 50)),
        21.0,
        epsilon = 1e-9
    );
    // No sample at or before the right edge: the last point stands in.
    assert_relative_eq!(
        compute_window_return(&points, "portfolio", TimeWindow::new(-50, -10)),
        21.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        compute_window_return(&points, "portfolio", TimeWindow::new(1, 2)),
        10.0,
        epsilon = 1e-9
    );
}

#[test]
fn return_tracks_the_primary_series_only() {
    let points = vec![
        DataPoint::new(0)
            .with_value("portfolio", 200.0)
            .with_value("sp500", 100.0),
        DataPoint::new(1)
            .with_value("portfolio", 150.0)
            .with_value("sp500", 300.0),
    ];
    let mut engine = ViewportEngine::with_data(config(), points).expect("engine init");
    engine.toggle_series("portfolio");

    assert!(!engine.is_series_visible("portfolio"));
    assert_relative_eq!(engine.window_return(), -25.0, epsilon = 1e-9);
}
