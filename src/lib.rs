//! chart-viewport: viewport engine for interactive performance charts.
//!
//! The engine owns the visible time window over a read-only series and
//! derives what a renderer needs from it: resolved bounds, Y-domain,
//! calendar-aligned axis ticks and the headline return. Drawing is left to
//! the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{ViewportAction, ViewportEngine, ViewportEngineConfig};
pub use error::{ChartError, ChartResult};
