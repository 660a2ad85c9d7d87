use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, DataSeries, NamedRange, SeriesVisibility, Viewport};
use crate::error::ChartResult;
use crate::extensions::ViewportPlugin;
use crate::interaction::{InteractionState, ZoomSnapshot};

use super::ViewportEngineConfig;
use super::validation::validate_engine_config;

/// Which of the two chart states the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ZoomState {
    /// A preset range is active (possibly panned).
    Overview { range: NamedRange },
    /// A drag-committed window with no preset label.
    CustomZoom { viewport: Viewport },
}

/// Viewport state machine over one read-only data series.
///
/// Every mutating method runs to completion synchronously and reports
/// whether it changed anything; invalid gestures are no-ops, never errors.
pub struct ViewportEngine {
    pub(super) config: ViewportEngineConfig,
    pub(super) data: DataSeries,
    pub(super) data_revision: u64,
    pub(super) viewport: Viewport,
    pub(super) named_range: Option<NamedRange>,
    pub(super) zoom_history: Option<ZoomSnapshot>,
    pub(super) visible_series: SeriesVisibility,
    pub(super) interaction: InteractionState,
    pub(super) plugins: Vec<Box<dyn ViewportPlugin>>,
}

impl ViewportEngine {
    /// Builds an engine with no data in `Overview(config.default_range)`.
    pub fn new(config: ViewportEngineConfig) -> ChartResult<Self> {
        let visible_series = validate_engine_config(&config)?;
        debug!(
            series_count = config.series.len(),
            primary = %config.primary_series,
            default_range = config.default_range.label(),
            "viewport engine init"
        );

        Ok(Self {
            named_range: Some(config.default_range),
            config,
            data: DataSeries::empty(),
            data_revision: 0,
            viewport: Viewport::full_extent(),
            zoom_history: None,
            visible_series,
            interaction: InteractionState::default(),
            plugins: Vec::new(),
        })
    }

    /// Builds an engine and loads `points` as the first data revision.
    pub fn with_data(config: ViewportEngineConfig, points: Vec<DataPoint>) -> ChartResult<Self> {
        let mut engine = Self::new(config)?;
        engine.set_data(points);
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &ViewportEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn named_range(&self) -> Option<NamedRange> {
        self.named_range
    }

    #[must_use]
    pub fn zoom_history(&self) -> Option<ZoomSnapshot> {
        self.zoom_history
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        match self.named_range {
            Some(range) => ZoomState::Overview { range },
            None => ZoomState::CustomZoom {
                viewport: self.viewport,
            },
        }
    }

    /// Active preset label, or `"Custom"` while a drag zoom is shown.
    #[must_use]
    pub fn range_label(&self) -> &'static str {
        self.named_range.map_or("Custom", NamedRange::label)
    }
}
