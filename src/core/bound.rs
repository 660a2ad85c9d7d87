use serde::{Deserialize, Serialize};

use crate::core::TimeWindow;

/// One edge of the visible window.
///
/// `Min`/`Max` track the data extent, so they keep following the series when
/// it is replaced. `Fixed` pins an absolute timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Min,
    Max,
    Fixed(i64),
}

impl Bound {
    /// Resolves the bound against `(data_min, data_max)`.
    ///
    /// Sentinels resolve to `None` when there is no extent (empty data);
    /// fixed bounds always pass through unchanged.
    #[must_use]
    pub fn resolve(self, extent: Option<(i64, i64)>) -> Option<i64> {
        match self {
            Self::Min => extent.map(|(min, _)| min),
            Self::Max => extent.map(|(_, max)| max),
            Self::Fixed(time_ms) => Some(time_ms),
        }
    }
}

/// Visible left/right bounds of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub left: Bound,
    pub right: Bound,
}

impl Viewport {
    #[must_use]
    pub fn new(left: Bound, right: Bound) -> Self {
        Self { left, right }
    }

    /// Tracks the whole data extent.
    #[must_use]
    pub fn full_extent() -> Self {
        Self::new(Bound::Min, Bound::Max)
    }

    #[must_use]
    pub fn fixed(left_ms: i64, right_ms: i64) -> Self {
        Self::new(Bound::Fixed(left_ms), Bound::Fixed(right_ms))
    }

    #[must_use]
    pub fn resolve(self, extent: Option<(i64, i64)>) -> Option<TimeWindow> {
        let left_ms = self.left.resolve(extent)?;
        let right_ms = self.right.resolve(extent)?;
        Some(TimeWindow::new(left_ms, right_ms))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::full_extent()
    }
}
