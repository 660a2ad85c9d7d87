pub mod axis_label_format;
pub mod axis_ticks;
pub mod bound;
pub mod data_series;
pub mod named_range;
pub mod primitives;
pub mod series;
pub mod synthetic;
pub mod types;
pub mod window_return;
pub mod windowing;
pub mod y_domain;

pub use axis_label_format::{AxisTick, build_axis_ticks, format_tick_label};
pub use axis_ticks::{AxisTicks, TickTier, compute_axis_ticks};
pub use bound::{Bound, Viewport};
pub use data_series::DataSeries;
pub use named_range::NamedRange;
pub use series::{SeriesDescriptor, SeriesId, SeriesStyle, SeriesVisibility};
pub use synthetic::{SyntheticSeriesConfig, SyntheticSeriesSpec, generate_synthetic_series};
pub use types::{DataPoint, TimeWindow};
pub use window_return::compute_window_return;
pub use windowing::{expand_window, points_in_time_window};
pub use y_domain::{Y_DOMAIN_PADDING_RATIO, YDomain, compute_y_domain};
