use serde::{Deserialize, Serialize};

use crate::core::{NamedRange, TimeWindow};
use crate::interaction::{InteractionMode, PanDirection};

/// Read-only engine state passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub data_revision: u64,
    pub points_len: usize,
    pub window: Option<TimeWindow>,
    pub named_range: Option<NamedRange>,
    pub visible_series_count: usize,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataUpdated { points_len: usize, revision: u64 },
    NamedRangeSelected { range: NamedRange },
    DragStarted { time_ms: i64 },
    DragCancelled,
    ZoomCommitted { left_ms: i64, right_ms: i64 },
    ZoomReset { restored_from_history: bool },
    Panned { direction: PanDirection },
    SeriesVisibilityChanged { visible_count: usize },
}

/// Observer hook for host-side logic (analytics, linked widgets, persistence).
///
/// Plugins see events after the state change has been applied and cannot
/// mutate the engine.
pub trait ViewportPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
