use chart_viewport::api::{ViewportEngine, ViewportEngineConfig};
use chart_viewport::core::{
    DataPoint, SeriesDescriptor, SeriesId, SeriesStyle, YDomain, compute_y_domain,
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

#[test]
fn padding_is_five_percent_of_span_rounded_half_away_from_zero() {
    let id = SeriesId::from("portfolio");
    let points = vec![
        DataPoint::new(0).with_value("portfolio", 10.0),
        DataPoint::new(1).with_value("portfolio", 20.0),
    ];

    // [10, 20] pads to [9.5, 20.5], which rounds to [10, 21].
    assert_eq!(
        compute_y_domain(&points, [&id]),
        YDomain::Fixed {
            min: 10.0,
            max: 21.0
        }
    );
}

#[test]
fn negative_values_round_away_from_zero() {
    let id = SeriesId::from("portfolio");
    let points = vec![
        DataPoint::new(0).with_value("portfolio", -20.0),
        DataPoint::new(1).with_value("portfolio", -10.0),
    ];

    assert_eq!(
        compute_y_domain(&points, [&id]),
        YDomain::Fixed {
            min: -21.0,
            max: -10.0
        }
    );
}

#[test]
fn empty_inputs_yield_auto_sentinel() {
    let id = SeriesId::from("portfolio");
    assert_eq!(compute_y_domain(&[], [&id]), YDomain::Auto);
    assert!(YDomain::Auto.bounds().is_none());

    let engine = ViewportEngine::new(config()).expect("engine init");
    assert_eq!(engine.y_domain(), YDomain::Auto);
}

#[test]
fn engine_domain_only_considers_points_in_window() {
    let points = vec![
        DataPoint::new(0).with_value("portfolio", 1_000.0),
        DataPoint::new(10).with_value("portfolio", 10.0),
        DataPoint::new(20).with_value("portfolio", 20.0),
        DataPoint::new(30).with_value("portfolio", 5_000.0),
    ];
    let mut engine = ViewportEngine::with_data(config(), points).expect("engine init");

    engine.begin_drag_selection(5);
    engine.update_drag_selection(25);
    engine.commit_drag_selection();

    assert_eq!(engine.y_domain().bounds(), Some((10.0, 21.0)));
}

#[test]
fn window_inside_a_data_gap_is_auto() {
    let points = vec![
        DataPoint::new(0).with_value("portfolio", 1.0),
        DataPoint::new(100).with_value("portfolio", 2.0),
    ];
    let mut engine = ViewportEngine::with_data(config(), points).expect("engine init");

    engine.begin_drag_selection(40);
    engine.update_drag_selection(60);
    engine.commit_drag_selection();

    assert!(engine.visible_points().is_empty());
    assert!(engine.y_domain().is_auto());
}

#[test]
fn points_missing_visible_series_values_are_skipped() {
    let points = vec![
        DataPoint::new(0).with_value("sp500", 50.0),
        DataPoint::new(1)
            .with_value("portfolio", 10.0)
            .with_value("sp500", 20.0),
        DataPoint::new(2).with_value("portfolio", 30.0),
    ];
    let engine = ViewportEngine::with_data(config(), points).expect("engine init");

    assert_eq!(engine.y_domain().bounds(), Some((8.0, 52.0)));
}
