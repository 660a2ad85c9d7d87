use serde::{Deserialize, Serialize};

use crate::core::{NamedRange, SeriesId};
use crate::interaction::PanDirection;

use super::ViewportEngine;

/// Every user gesture the engine understands, as plain data.
///
/// Lets hosts drive the engine as a reducer and lets the replay tool read
/// scripted sessions from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ViewportAction {
    SelectNamedRange { range: NamedRange },
    BeginDragSelection { time_ms: i64 },
    UpdateDragSelection { time_ms: i64 },
    CommitDragSelection,
    CancelDragSelection,
    ResetZoom,
    PanPeriod { direction: PanDirection },
    ToggleSeries { series: SeriesId },
}

impl ViewportEngine {
    /// Applies one action. Returns `true` when engine state changed.
    pub fn dispatch(&mut self, action: &ViewportAction) -> bool {
        match action {
            ViewportAction::SelectNamedRange { range } => self.select_named_range(*range),
            ViewportAction::BeginDragSelection { time_ms } => {
                let before = self.interaction.drag_selection();
                self.begin_drag_selection(*time_ms);
                self.interaction.drag_selection() != before
            }
            ViewportAction::UpdateDragSelection { time_ms } => {
                self.update_drag_selection(*time_ms)
            }
            ViewportAction::CommitDragSelection => self.commit_drag_selection(),
            ViewportAction::CancelDragSelection => self.cancel_drag_selection(),
            ViewportAction::ResetZoom => {
                let before = (self.viewport, self.named_range, self.zoom_history);
                self.reset_zoom();
                (self.viewport, self.named_range, self.zoom_history) != before
            }
            ViewportAction::PanPeriod { direction } => self.pan_period(*direction),
            ViewportAction::ToggleSeries { series } => self.toggle_series(series.as_str()),
        }
    }
}
