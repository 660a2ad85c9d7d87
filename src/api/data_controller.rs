use tracing::debug;

use crate::core::{DataPoint, DataSeries};
use crate::interaction::ZoomSnapshot;

use super::{PluginEvent, ViewportEngine};

impl ViewportEngine {
    /// Replaces the data series with a new revision.
    ///
    /// Sentinel bounds follow the new extent automatically. While a preset is
    /// active its left bound is recomputed from the new last timestamp, which
    /// also drops any pan offset; a custom zoom keeps its fixed bounds. A
    /// preset view saved for zoom reset is re-anchored the same way. Any
    /// in-progress drag is dropped.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        let original_count = points.len();
        self.data = DataSeries::from_points(points);
        self.data_revision += 1;
        self.interaction.clear_drag();
        debug!(
            original_count,
            canonical_count = self.data.len(),
            revision = self.data_revision,
            "set data points"
        );

        if let Some(range) = self.named_range {
            self.apply_named_range(range);
        }
        if let Some(ZoomSnapshot {
            named_range: Some(saved_range),
            ..
        }) = self.zoom_history
        {
            self.zoom_history = Some(ZoomSnapshot {
                viewport: self.named_range_viewport(saved_range),
                named_range: Some(saved_range),
            });
        }

        self.emit_plugin_event(PluginEvent::DataUpdated {
            points_len: self.data.len(),
            revision: self.data_revision,
        });
    }

    #[must_use]
    pub fn data(&self) -> &DataSeries {
        &self.data
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.data.points()
    }

    /// Monotonic counter bumped by every `set_data` call.
    #[must_use]
    pub fn data_revision(&self) -> u64 {
        self.data_revision
    }
}
