use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{DataPoint, TimeWindow, points_in_time_window};

/// Read-only, time-ordered sample sequence backing one chart revision.
///
/// Construction canonicalizes input: non-finite values are dropped, points
/// are sorted by time and duplicate timestamps keep the last sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct DataSeries {
    points: Vec<DataPoint>,
}

impl DataSeries {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            points: canonicalize_points(points),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&DataPoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    /// `(first timestamp, last timestamp)`, `None` for an empty series.
    #[must_use]
    pub fn extent(&self) -> Option<(i64, i64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.time_ms, last.time_ms)),
            _ => None,
        }
    }

    #[must_use]
    pub fn in_window(&self, window: TimeWindow) -> &[DataPoint] {
        points_in_time_window(&self.points, window.left_ms, window.right_ms)
    }
}

impl From<Vec<DataPoint>> for DataSeries {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::from_points(points)
    }
}

impl From<DataSeries> for Vec<DataPoint> {
    fn from(series: DataSeries) -> Self {
        series.points
    }
}

fn canonicalize_points(mut points: Vec<DataPoint>) -> Vec<DataPoint> {
    let mut dropped_value_count = 0_usize;
    for point in &mut points {
        let before = point.values.len();
        point.values.retain(|_, value| value.is_finite());
        dropped_value_count += before - point.values.len();
    }

    // Stable sort keeps arrival order among equal timestamps so the last one wins.
    points.sort_by_key(|point| point.time_ms);

    let mut deduped: Vec<DataPoint> = Vec::with_capacity(points.len());
    let mut duplicate_count = 0_usize;
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if point.time_ms == last.time_ms {
                *last = point;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(point);
    }

    if dropped_value_count > 0 || duplicate_count > 0 {
        warn!(
            dropped_value_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized data points"
        );
    }
    deduped
}
