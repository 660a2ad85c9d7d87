use serde::{Deserialize, Serialize};

use crate::core::{NamedRange, SeriesDescriptor, SeriesId};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup next to their own settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportEngineConfig {
    pub series: Vec<SeriesDescriptor>,
    /// Series whose change is reported as the headline return.
    pub primary_series: SeriesId,
    #[serde(default = "default_range")]
    pub default_range: NamedRange,
    /// Series shown at startup; all configured series when `None`.
    #[serde(default)]
    pub initial_visible_series: Option<Vec<SeriesId>>,
}

impl ViewportEngineConfig {
    #[must_use]
    pub fn new(series: Vec<SeriesDescriptor>, primary_series: impl Into<SeriesId>) -> Self {
        Self {
            series,
            primary_series: primary_series.into(),
            default_range: default_range(),
            initial_visible_series: None,
        }
    }

    /// Sets the preset active before any interaction.
    #[must_use]
    pub fn with_default_range(mut self, range: NamedRange) -> Self {
        self.default_range = range;
        self
    }

    #[must_use]
    pub fn with_initial_visible_series<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SeriesId>,
    {
        self.initial_visible_series = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn descriptor(&self, id: &str) -> Option<&SeriesDescriptor> {
        self.series.iter().find(|series| series.id.as_str() == id)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_range() -> NamedRange {
    NamedRange::OneYear
}
