use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::primitives::unix_millis_to_datetime;
use crate::core::{AxisTicks, TickTier, compute_axis_ticks};

/// Gridline position paired with its formatted label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTick {
    pub time_ms: i64,
    pub label: String,
}

/// Formats a tick timestamp at the granularity of `tier` (UTC).
///
/// `2024`, `Q2 2024`, `Apr 2024`, `Apr 03`. Timestamps chrono cannot
/// represent are printed as raw milliseconds.
#[must_use]
pub fn format_tick_label(time_ms: i64, tier: TickTier) -> String {
    let Some(time) = unix_millis_to_datetime(time_ms) else {
        return time_ms.to_string();
    };

    match tier {
        TickTier::Yearly => time.format("%Y").to_string(),
        TickTier::Quarterly => format!("Q{} {}", time.month0() / 3 + 1, time.year()),
        TickTier::Monthly => time.format("%b %Y").to_string(),
        TickTier::Daily => time.format("%b %d").to_string(),
    }
}

/// Labeled gridlines for `[left_ms, right_ms]`.
#[must_use]
pub fn build_axis_ticks(left_ms: i64, right_ms: i64) -> Vec<AxisTick> {
    let tier = AxisTicks::new(left_ms, right_ms).tier();
    compute_axis_ticks(left_ms, right_ms)
        .into_iter()
        .map(|time_ms| AxisTick {
            time_ms,
            label: format_tick_label(time_ms, tier),
        })
        .collect()
}
