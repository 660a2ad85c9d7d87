use tracing::{debug, trace};

use crate::core::{TimeWindow, Viewport};
use crate::interaction::PanDirection;

use super::{PluginEvent, ViewportEngine};

impl ViewportEngine {
    /// Whether a pan in `direction` would move the window.
    #[must_use]
    pub fn can_pan(&self, direction: PanDirection) -> bool {
        match (self.resolve_window(), self.data.extent()) {
            (Some(window), Some(extent)) => pan_allowed(window, extent, direction),
            _ => false,
        }
    }

    /// Shifts the window by one full window duration.
    ///
    /// The result is clamped to the data extent with the duration preserved.
    /// The active preset label, if any, is kept.
    pub fn pan_period(&mut self, direction: PanDirection) -> bool {
        let (Some(window), Some(extent)) = (self.resolve_window(), self.data.extent()) else {
            trace!(?direction, "ignoring pan without resolvable window");
            return false;
        };
        if !pan_allowed(window, extent, direction) {
            trace!(?direction, ?window, "pan disabled at data edge");
            return false;
        }

        let target = pan_target(window, extent, direction);
        self.viewport = Viewport::fixed(target.left_ms, target.right_ms);
        debug!(
            ?direction,
            left_ms = target.left_ms,
            right_ms = target.right_ms,
            "panned one period"
        );
        self.emit_plugin_event(PluginEvent::Panned { direction });
        true
    }
}

fn pan_allowed(window: TimeWindow, (data_min, data_max): (i64, i64), direction: PanDirection) -> bool {
    let covers_full_extent = window.left_ms <= data_min && window.right_ms >= data_max;
    if covers_full_extent || window.duration_ms() == 0 {
        return false;
    }
    match direction {
        PanDirection::Back => window.left_ms > data_min,
        PanDirection::Forward => window.right_ms < data_max,
    }
}

fn pan_target(
    window: TimeWindow,
    (data_min, data_max): (i64, i64),
    direction: PanDirection,
) -> TimeWindow {
    let duration = window.duration_ms();
    let shifted = match direction {
        PanDirection::Back => window.shifted(-duration),
        PanDirection::Forward => window.shifted(duration),
    };

    if shifted.right_ms > data_max {
        TimeWindow {
            left_ms: data_max.saturating_sub(duration),
            right_ms: data_max,
        }
    } else if shifted.left_ms < data_min {
        TimeWindow {
            left_ms: data_min,
            right_ms: data_min.saturating_add(duration),
        }
    } else {
        shifted
    }
}
