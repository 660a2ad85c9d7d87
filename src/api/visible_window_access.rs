use crate::core::{
    AxisTick, DataPoint, TimeWindow, YDomain, build_axis_ticks, compute_axis_ticks,
    compute_window_return, compute_y_domain, expand_window,
};
use crate::error::ChartResult;

use super::ViewportEngine;

impl ViewportEngine {
    /// Current viewport with `Min`/`Max` replaced by the data extent.
    ///
    /// `None` only while a sentinel bound has no data to resolve against.
    #[must_use]
    pub fn resolve_window(&self) -> Option<TimeWindow> {
        self.viewport.resolve(self.data.extent())
    }

    /// Points inside the resolved window.
    #[must_use]
    pub fn visible_points(&self) -> &[DataPoint] {
        match self.resolve_window() {
            Some(window) => self.data.in_window(window),
            None => &[],
        }
    }

    /// Visible points plus neighbors within `ratio` of the window duration,
    /// so line segments reach the plot edges.
    pub fn visible_points_with_overscan(&self, ratio: f64) -> ChartResult<&[DataPoint]> {
        let Some(window) = self.resolve_window() else {
            return Ok(&[]);
        };
        let expanded = expand_window(window, ratio)?;
        Ok(self.data.in_window(expanded))
    }

    /// Y-domain across the currently visible series.
    #[must_use]
    pub fn y_domain(&self) -> YDomain {
        compute_y_domain(self.visible_points(), &self.visible_series)
    }

    /// Gridline timestamps for the resolved window; empty when unresolved.
    #[must_use]
    pub fn axis_ticks(&self) -> Vec<i64> {
        self.resolve_window()
            .map(|window| compute_axis_ticks(window.left_ms, window.right_ms))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn labeled_axis_ticks(&self) -> Vec<AxisTick> {
        self.resolve_window()
            .map(|window| build_axis_ticks(window.left_ms, window.right_ms))
            .unwrap_or_default()
    }

    /// Percentage change of the primary series across the resolved window.
    #[must_use]
    pub fn window_return(&self) -> f64 {
        self.resolve_window().map_or(0.0, |window| {
            compute_window_return(
                self.data.points(),
                self.config.primary_series.as_str(),
                window,
            )
        })
    }
}
