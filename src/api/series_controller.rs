use tracing::{debug, warn};

use crate::core::{SeriesDescriptor, SeriesId, SeriesVisibility};

use super::{PluginEvent, ViewportEngine};

impl ViewportEngine {
    #[must_use]
    pub fn series(&self) -> &[SeriesDescriptor] {
        &self.config.series
    }

    #[must_use]
    pub fn primary_series(&self) -> &SeriesId {
        &self.config.primary_series
    }

    #[must_use]
    pub fn visible_series(&self) -> &SeriesVisibility {
        &self.visible_series
    }

    #[must_use]
    pub fn is_series_visible(&self, id: &str) -> bool {
        self.visible_series.contains(id)
    }

    /// Shows or hides a configured series.
    ///
    /// Hiding the last visible series and toggling an unconfigured id are
    /// both no-ops.
    pub fn toggle_series(&mut self, id: &str) -> bool {
        let Some(descriptor) = self.config.descriptor(id) else {
            warn!(series = id, "ignoring toggle of unconfigured series");
            return false;
        };

        let id: SeriesId = descriptor.id.clone();
        let changed = self.visible_series.toggle(&id);
        debug!(
            series = %id,
            changed,
            visible = self.visible_series.contains(id.as_str()),
            visible_count = self.visible_series.count(),
            "series toggled"
        );
        if changed {
            self.emit_plugin_event(PluginEvent::SeriesVisibilityChanged {
                visible_count: self.visible_series.count(),
            });
        }
        changed
    }
}
