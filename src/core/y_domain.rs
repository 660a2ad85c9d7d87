use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[cfg(feature = "parallel-domain")]
use rayon::prelude::*;

use crate::core::{DataPoint, SeriesId};

/// Fraction of the value span added above and below the extremes.
pub const Y_DOMAIN_PADDING_RATIO: f64 = 0.05;

/// Vertical axis domain for the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum YDomain {
    /// Nothing to measure; the rendering layer picks its own scale.
    Auto,
    Fixed { min: f64, max: f64 },
}

impl YDomain {
    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    #[must_use]
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Self::Auto => None,
            Self::Fixed { min, max } => Some((min, max)),
        }
    }
}

type Extent = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Padded, integer-rounded value domain of `points` across `visible` series.
///
/// `points` is expected to be pre-filtered to the visible window. Each end is
/// padded by 5% of the span and rounded half away from zero (`[10, 20]`
/// becomes `[10, 21]`). A flat window pads by 5% of the value magnitude
/// instead, and a domain that rounding collapses is widened to the enclosing
/// integers so `min < max` always holds.
#[must_use]
pub fn compute_y_domain<'a, I>(points: &[DataPoint], visible: I) -> YDomain
where
    I: IntoIterator<Item = &'a SeriesId>,
{
    let ids: SmallVec<[&SeriesId; 4]> = visible.into_iter().collect();
    if points.is_empty() || ids.is_empty() {
        return YDomain::Auto;
    }

    let Some((low, high)) = value_extent(points, &ids) else {
        return YDomain::Auto;
    };
    let (low, high) = (low.into_inner(), high.into_inner());

    let span = high - low;
    let padding = if span > 0.0 {
        span * Y_DOMAIN_PADDING_RATIO
    } else if low != 0.0 {
        low.abs() * Y_DOMAIN_PADDING_RATIO
    } else {
        1.0
    };

    let mut min = (low - padding).round();
    let mut max = (high + padding).round();
    if max <= min {
        min = low.floor();
        max = high.ceil();
        if max <= min {
            max = min + 1.0;
        }
    }
    YDomain::Fixed { min, max }
}

fn value_extent(points: &[DataPoint], ids: &[&SeriesId]) -> Option<Extent> {
    #[cfg(feature = "parallel-domain")]
    {
        points
            .par_iter()
            .map(|point| point_extent(point, ids))
            .reduce(|| None, merge_extents)
    }

    #[cfg(not(feature = "parallel-domain"))]
    {
        points
            .iter()
            .map(|point| point_extent(point, ids))
            .fold(None, merge_extents)
    }
}

fn point_extent(point: &DataPoint, ids: &[&SeriesId]) -> Option<Extent> {
    ids.iter()
        .filter_map(|id| point.values.get(*id).copied())
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .fold(None, |acc, value| merge_extents(acc, Some((value, value))))
}

fn merge_extents(left: Option<Extent>, right: Option<Extent>) -> Option<Extent> {
    match (left, right) {
        (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.max(b.1))),
        (extent, None) | (None, extent) => extent,
    }
}

#[cfg(test)]
mod tests {
    use super::{YDomain, compute_y_domain};
    use crate::core::{DataPoint, SeriesId};

    #[test]
    fn flat_window_still_yields_a_non_empty_domain() {
        let id = SeriesId::from("p");
        let points = vec![
            DataPoint::new(0).with_value("p", 100.0),
            DataPoint::new(1).with_value("p", 100.0),
        ];
        assert_eq!(
            compute_y_domain(&points, [&id]),
            YDomain::Fixed {
                min: 95.0,
                max: 105.0
            }
        );
    }

    #[test]
    fn small_values_widen_to_enclosing_integers() {
        let id = SeriesId::from("p");
        let points = vec![
            DataPoint::new(0).with_value("p", 0.01),
            DataPoint::new(1).with_value("p", 0.02),
        ];
        assert_eq!(
            compute_y_domain(&points, [&id]),
            YDomain::Fixed { min: 0.0, max: 1.0 }
        );
    }

    #[test]
    fn series_without_values_is_auto() {
        let id = SeriesId::from("missing");
        let points = vec![DataPoint::new(0).with_value("p", 1.0)];
        assert!(compute_y_domain(&points, [&id]).is_auto());
    }
}
