use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::SeriesId;
use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::ChartResult;

/// One sample of every series at a single instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time_ms: i64,
    pub values: IndexMap<SeriesId, f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(time_ms: i64) -> Self {
        Self {
            time_ms,
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, series: impl Into<SeriesId>, value: f64) -> Self {
        self.values.insert(series.into(), value);
        self
    }

    #[must_use]
    pub fn value(&self, series: &str) -> Option<f64> {
        self.values.get(series).copied()
    }

    pub fn from_decimal_values<I, S>(time: DateTime<Utc>, values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<SeriesId>,
    {
        let mut point = Self::new(datetime_to_unix_millis(time));
        for (series, value) in values {
            let series = series.into();
            let value = decimal_to_f64(value, series.as_str())?;
            point.values.insert(series, value);
        }
        Ok(point)
    }
}

/// Resolved visible window in unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub left_ms: i64,
    pub right_ms: i64,
}

impl TimeWindow {
    /// Builds a window, swapping reversed bounds.
    #[must_use]
    pub fn new(left_ms: i64, right_ms: i64) -> Self {
        Self {
            left_ms: left_ms.min(right_ms),
            right_ms: left_ms.max(right_ms),
        }
    }

    #[must_use]
    pub fn duration_ms(self) -> i64 {
        self.right_ms.saturating_sub(self.left_ms)
    }

    #[must_use]
    pub fn shifted(self, delta_ms: i64) -> Self {
        Self {
            left_ms: self.left_ms.saturating_add(delta_ms),
            right_ms: self.right_ms.saturating_add(delta_ms),
        }
    }
}
