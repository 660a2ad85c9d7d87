use crate::core::{DataPoint, TimeWindow};

/// Percentage change of `primary` across `window`.
///
/// The start sample is the first point at or after the left edge and the end
/// sample the last point at or before the right edge; either falls back to
/// the series' first/last point when the edge lies outside the data. Returns
/// `0.0` for empty data, a zero start value, or a missing primary value.
#[must_use]
pub fn compute_window_return(points: &[DataPoint], primary: &str, window: TimeWindow) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };

    let start_index = points.partition_point(|point| point.time_ms < window.left_ms);
    let start = points.get(start_index).unwrap_or(first);

    let end_index = points.partition_point(|point| point.time_ms <= window.right_ms);
    let end = end_index
        .checked_sub(1)
        .and_then(|index| points.get(index))
        .unwrap_or(last);

    let (Some(start_value), Some(end_value)) = (start.value(primary), end.value(primary)) else {
        return 0.0;
    };
    if start_value == 0.0 {
        return 0.0;
    }

    let pct = (end_value - start_value) / start_value * 100.0;
    if pct.is_finite() { pct } else { 0.0 }
}
