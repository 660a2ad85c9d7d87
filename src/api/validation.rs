use indexmap::IndexSet;

use crate::core::{SeriesId, SeriesVisibility};
use crate::error::{ChartError, ChartResult};

use super::ViewportEngineConfig;

/// Checks series ids and builds the initial visibility set.
pub(super) fn validate_engine_config(
    config: &ViewportEngineConfig,
) -> ChartResult<SeriesVisibility> {
    if config.series.is_empty() {
        return Err(ChartError::InvalidConfig(
            "at least one series must be configured".to_owned(),
        ));
    }

    let mut known: IndexSet<&str> = IndexSet::with_capacity(config.series.len());
    for series in &config.series {
        let id = series.id.as_str();
        if id.is_empty() {
            return Err(ChartError::InvalidConfig(
                "series id must not be empty".to_owned(),
            ));
        }
        if !known.insert(id) {
            return Err(ChartError::InvalidConfig(format!(
                "series id `{id}` is configured more than once"
            )));
        }
    }

    if !known.contains(config.primary_series.as_str()) {
        return Err(ChartError::UnknownSeries(
            config.primary_series.as_str().to_owned(),
        ));
    }

    let initial: Vec<SeriesId> = match &config.initial_visible_series {
        Some(ids) => {
            if let Some(unknown) = ids.iter().find(|id| !known.contains(id.as_str())) {
                return Err(ChartError::UnknownSeries(unknown.as_str().to_owned()));
            }
            ids.clone()
        }
        None => config.series.iter().map(|series| series.id.clone()).collect(),
    };

    SeriesVisibility::new(initial)
}
