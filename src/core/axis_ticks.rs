use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{DAY_MS, date_start_millis, unix_millis_to_datetime};

const FIVE_YEARS_MS: i64 = 5 * 365 * DAY_MS;
const HALF_YEAR_MS: i64 = 180 * DAY_MS;
const TWO_MONTHS_MS: i64 = 60 * DAY_MS;

/// Calendar cadence of time-axis gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickTier {
    Yearly,
    Quarterly,
    Monthly,
    Daily,
}

impl TickTier {
    /// Picks the cadence for a window duration:
    /// `> 5y` yearly, `> 180d` quarterly, `> 60d` monthly, daily otherwise.
    #[must_use]
    pub fn for_duration(duration_ms: i64) -> Self {
        if duration_ms > FIVE_YEARS_MS {
            Self::Yearly
        } else if duration_ms > HALF_YEAR_MS {
            Self::Quarterly
        } else if duration_ms > TWO_MONTHS_MS {
            Self::Monthly
        } else {
            Self::Daily
        }
    }

    /// Start of the tier unit containing `date`.
    fn floor(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1),
            Self::Quarterly => NaiveDate::from_ymd_opt(date.year(), date.month0() / 3 * 3 + 1, 1),
            Self::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
            Self::Daily => Some(date),
        }
    }

    fn advance(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Yearly => date.checked_add_months(Months::new(12)),
            Self::Quarterly => date.checked_add_months(Months::new(3)),
            Self::Monthly => date.checked_add_months(Months::new(1)),
            Self::Daily => date.succ_opt(),
        }
    }
}

/// Lazy, restartable sequence of tier-aligned tick timestamps (UTC).
///
/// Yields every aligned instant in `[left_ms, right_ms]`, strictly
/// increasing. Clone the iterator to replay it.
#[derive(Debug, Clone)]
pub struct AxisTicks {
    tier: TickTier,
    next: Option<NaiveDate>,
    right_ms: i64,
}

impl AxisTicks {
    #[must_use]
    pub fn new(left_ms: i64, right_ms: i64) -> Self {
        let (left_ms, right_ms) = (left_ms.min(right_ms), left_ms.max(right_ms));
        let tier = TickTier::for_duration(right_ms.saturating_sub(left_ms));
        Self {
            tier,
            next: first_aligned(tier, left_ms),
            right_ms,
        }
    }

    #[must_use]
    pub fn tier(&self) -> TickTier {
        self.tier
    }
}

impl Iterator for AxisTicks {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let date = self.next.take()?;
        let time_ms = date_start_millis(date)?;
        if time_ms > self.right_ms {
            return None;
        }
        self.next = self.tier.advance(date);
        Some(time_ms)
    }
}

impl std::iter::FusedIterator for AxisTicks {}

fn first_aligned(tier: TickTier, left_ms: i64) -> Option<NaiveDate> {
    let date = unix_millis_to_datetime(left_ms)?.date_naive();
    let floor = tier.floor(date)?;
    if date_start_millis(floor)? >= left_ms {
        Some(floor)
    } else {
        tier.advance(floor)
    }
}

/// Gridline timestamps for `[left_ms, right_ms]`.
///
/// Falls back to the window edges (`[left]` for a zero-width window) when no
/// aligned instant lands inside the window.
#[must_use]
pub fn compute_axis_ticks(left_ms: i64, right_ms: i64) -> Vec<i64> {
    let ticks: Vec<i64> = AxisTicks::new(left_ms, right_ms).collect();
    if !ticks.is_empty() {
        return ticks;
    }

    let (min_t, max_t) = (left_ms.min(right_ms), left_ms.max(right_ms));
    if min_t == max_t {
        vec![min_t]
    } else {
        vec![min_t, max_t]
    }
}
