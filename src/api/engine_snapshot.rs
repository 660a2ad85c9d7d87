use serde::{Deserialize, Serialize};

use crate::core::{AxisTick, NamedRange, SeriesId, TimeWindow, Viewport, YDomain};
use crate::interaction::{DragSelection, InteractionMode, PanDirection, ZoomSnapshot};

use super::ViewportEngine;

/// Everything a renderer needs for one frame, in serializable form.
///
/// Also used by regression tests and the replay tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub data_revision: u64,
    pub points_len: usize,
    pub viewport: Viewport,
    pub window: Option<TimeWindow>,
    pub named_range: Option<NamedRange>,
    pub range_label: String,
    pub zoom_history: Option<ZoomSnapshot>,
    pub interaction_mode: InteractionMode,
    pub drag_selection: Option<DragSelection>,
    pub visible_series: Vec<SeriesId>,
    pub y_domain: YDomain,
    pub axis_ticks: Vec<AxisTick>,
    pub window_return_pct: f64,
    pub can_pan_back: bool,
    pub can_pan_forward: bool,
}

impl ViewportEngine {
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            data_revision: self.data_revision,
            points_len: self.data.len(),
            viewport: self.viewport,
            window: self.resolve_window(),
            named_range: self.named_range,
            range_label: self.range_label().to_owned(),
            zoom_history: self.zoom_history,
            interaction_mode: self.interaction.mode(),
            drag_selection: self.interaction.drag_selection(),
            visible_series: self.visible_series.iter().cloned().collect(),
            y_domain: self.y_domain(),
            axis_ticks: self.labeled_axis_ticks(),
            window_return_pct: self.window_return(),
            can_pan_back: self.can_pan(PanDirection::Back),
            can_pan_forward: self.can_pan(PanDirection::Forward),
        }
    }
}
