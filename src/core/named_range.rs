use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_start_millis, unix_millis_to_datetime};

/// Preset spans selectable from the range buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    YearToDate,
    OneYear,
    ThreeYears,
}

impl NamedRange {
    /// Button order, shortest first.
    pub const ALL: [Self; 6] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::YearToDate,
        Self::OneYear,
        Self::ThreeYears,
    ];

    /// Preset used when a zoom reset has nothing to restore.
    #[must_use]
    pub fn longest() -> Self {
        Self::ThreeYears
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::YearToDate => "YTD",
            Self::OneYear => "1Y",
            Self::ThreeYears => "3Y",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|range| range.label().eq_ignore_ascii_case(label))
    }

    /// Left bound for this preset given the last data timestamp.
    ///
    /// Month arithmetic is calendar based and clamps to the end of shorter
    /// months (Mar 31 minus one month is Feb 28/29). The result is always
    /// strictly before `last_time_ms`: a year-to-date range ending exactly at
    /// Jan 1 00:00 UTC starts on the previous Jan 1. Returns `None` when the
    /// result leaves chrono's representable range.
    #[must_use]
    pub fn left_bound_from(self, last_time_ms: i64) -> Option<i64> {
        let last = unix_millis_to_datetime(last_time_ms)?;
        let months_back = match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
            Self::ThreeYears => 36,
            Self::YearToDate => {
                let jan_first = date_start_millis(NaiveDate::from_ymd_opt(last.year(), 1, 1)?)?;
                if jan_first < last_time_ms {
                    return Some(jan_first);
                }
                let year = last.year().checked_sub(1)?;
                return date_start_millis(NaiveDate::from_ymd_opt(year, 1, 1)?);
            }
        };

        last.checked_sub_months(Months::new(months_back))
            .map(|start| start.timestamp_millis())
    }
}
