use crate::core::{DataPoint, TimeWindow};
use crate::error::{ChartError, ChartResult};

/// Returns the slice of time-ordered `points` inside an inclusive window.
///
/// Reversed bounds are accepted.
#[must_use]
pub fn points_in_time_window(points: &[DataPoint], start: i64, end: i64) -> &[DataPoint] {
    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let lower = points.partition_point(|point| point.time_ms < min_t);
    let upper = points.partition_point(|point| point.time_ms <= max_t);
    if lower >= upper {
        return &[];
    }
    &points[lower..upper]
}

/// Widens a window by `ratio` of its duration on both sides.
pub fn expand_window(window: TimeWindow, ratio: f64) -> ChartResult<TimeWindow> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(ChartError::InvalidData(
            "overscan ratio must be finite and >= 0".to_owned(),
        ));
    }

    let padding = (window.duration_ms() as f64 * ratio).round() as i64;
    Ok(TimeWindow {
        left_ms: window.left_ms.saturating_sub(padding),
        right_ms: window.right_ms.saturating_add(padding),
    })
}
