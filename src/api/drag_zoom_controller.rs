use tracing::{debug, trace};

use crate::core::Viewport;
use crate::interaction::{DragSelection, InteractionMode, ZoomSnapshot};

use super::{PluginEvent, ViewportEngine};

impl ViewportEngine {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn drag_selection(&self) -> Option<DragSelection> {
        self.interaction.drag_selection()
    }

    /// Starts a zoom rectangle at `time_ms` (data space). Restarts any drag
    /// already in progress.
    pub fn begin_drag_selection(&mut self, time_ms: i64) {
        self.interaction.on_drag_start(time_ms);
        trace!(time_ms, "drag selection started");
        self.emit_plugin_event(PluginEvent::DragStarted { time_ms });
    }

    /// Moves the free edge of the zoom rectangle. No-op without an active drag.
    pub fn update_drag_selection(&mut self, time_ms: i64) -> bool {
        let moved = self.interaction.on_drag_move(time_ms);
        if !moved {
            trace!(time_ms, "ignoring drag update without active drag");
        }
        moved
    }

    /// Drops the rectangle without zooming (e.g. pointer left the plot).
    pub fn cancel_drag_selection(&mut self) -> bool {
        let cancelled = self.interaction.clear_drag();
        if cancelled {
            self.emit_plugin_event(PluginEvent::DragCancelled);
        }
        cancelled
    }

    /// Zooms to the dragged rectangle.
    ///
    /// A zero-width rectangle is a click and leaves the state untouched. When
    /// leaving a preset, the preset view is saved as the single undo slot;
    /// zooming again from custom zoom keeps the slot as is.
    pub fn commit_drag_selection(&mut self) -> bool {
        let Some(selection) = self.interaction.take_drag() else {
            trace!("ignoring drag commit without active drag");
            return false;
        };
        if selection.is_zero_width() {
            trace!(time_ms = selection.start_ms, "zero-width drag treated as click");
            return false;
        }

        let (left_ms, right_ms) = selection.ordered();
        if let Some(range) = self.named_range {
            self.zoom_history = Some(ZoomSnapshot {
                viewport: self.viewport,
                named_range: Some(range),
            });
        }
        self.viewport = Viewport::fixed(left_ms, right_ms);
        self.named_range = None;

        debug!(
            left_ms,
            right_ms,
            has_history = self.zoom_history.is_some(),
            "drag zoom committed"
        );
        self.emit_plugin_event(PluginEvent::ZoomCommitted { left_ms, right_ms });
        true
    }
}
