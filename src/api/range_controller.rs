use tracing::{debug, trace, warn};

use crate::core::{Bound, NamedRange, Viewport};

use super::{PluginEvent, ViewportEngine};

impl ViewportEngine {
    /// Switches to a preset range anchored at the last data point.
    ///
    /// Clears any drag in progress and the zoom history. No-op on empty data.
    pub fn select_named_range(&mut self, range: NamedRange) -> bool {
        if self.data.is_empty() {
            trace!(range = range.label(), "ignoring named range on empty data");
            return false;
        }

        self.interaction.clear_drag();
        self.zoom_history = None;
        self.named_range = Some(range);
        self.apply_named_range(range);
        debug!(
            range = range.label(),
            viewport = ?self.viewport,
            "named range selected"
        );
        self.emit_plugin_event(PluginEvent::NamedRangeSelected { range });
        true
    }

    /// Leaves custom zoom.
    ///
    /// Restores the view saved when the zoom was entered from a preset and
    /// returns `true`. Without a saved view it falls back to the full extent
    /// labelled with the longest preset and returns `false`.
    pub fn reset_zoom(&mut self) -> bool {
        let restored_from_history = match self.zoom_history.take() {
            Some(snapshot) => {
                self.viewport = snapshot.viewport;
                self.named_range = snapshot.named_range;
                true
            }
            None => {
                self.viewport = Viewport::full_extent();
                self.named_range = Some(NamedRange::longest());
                false
            }
        };

        debug!(
            restored_from_history,
            range = self.range_label(),
            viewport = ?self.viewport,
            "zoom reset"
        );
        self.emit_plugin_event(PluginEvent::ZoomReset {
            restored_from_history,
        });
        restored_from_history
    }

    pub(super) fn apply_named_range(&mut self, range: NamedRange) {
        self.viewport = self.named_range_viewport(range);
    }

    /// Viewport of `range` anchored at the current last data point.
    pub(super) fn named_range_viewport(&self, range: NamedRange) -> Viewport {
        let Some(last) = self.data.last() else {
            return Viewport::full_extent();
        };

        let left = match range.left_bound_from(last.time_ms) {
            Some(left_ms) => Bound::Fixed(left_ms),
            None => {
                warn!(
                    range = range.label(),
                    last_time_ms = last.time_ms,
                    "named range start is out of calendar range; using data minimum"
                );
                Bound::Min
            }
        };
        Viewport::new(left, Bound::Max)
    }
}
