use crate::extensions::PluginContext;

use super::{PluginEvent, ViewportEngine};

impl ViewportEngine {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            data_revision: self.data_revision,
            points_len: self.data.len(),
            window: self.resolve_window(),
            named_range: self.named_range,
            visible_series_count: self.visible_series.count(),
            interaction_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
