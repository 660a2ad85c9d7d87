use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::primitives::DAY_MS;
use crate::core::{DataPoint, SeriesId};
use crate::error::{ChartError, ChartResult};

/// Shape of one generated series: compounded drift plus a periodic wobble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSeriesSpec {
    pub id: SeriesId,
    pub initial_value: f64,
    /// Compounded growth per 365 days, e.g. `0.12` for +12%/year.
    pub annual_drift: f64,
    /// Relative wobble amplitude, e.g. `0.04` for ±4%.
    pub wobble_amplitude: f64,
    pub wobble_period_days: f64,
}

/// Daily synthetic data used by demos, the replay tool and benchmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSeriesConfig {
    pub start_ms: i64,
    pub days: u32,
    pub series: Vec<SyntheticSeriesSpec>,
}

impl SyntheticSeriesConfig {
    /// Three years of daily portfolio, S&P 500 and Nasdaq values.
    #[must_use]
    pub fn hero_demo(start_ms: i64) -> Self {
        Self {
            start_ms,
            days: 3 * 365 + 1,
            series: vec![
                SyntheticSeriesSpec {
                    id: SeriesId::from("portfolio"),
                    initial_value: 10_000.0,
                    annual_drift: 0.18,
                    wobble_amplitude: 0.04,
                    wobble_period_days: 97.0,
                },
                SyntheticSeriesSpec {
                    id: SeriesId::from("sp500"),
                    initial_value: 10_000.0,
                    annual_drift: 0.09,
                    wobble_amplitude: 0.03,
                    wobble_period_days: 131.0,
                },
                SyntheticSeriesSpec {
                    id: SeriesId::from("nasdaq"),
                    initial_value: 10_000.0,
                    annual_drift: 0.12,
                    wobble_amplitude: 0.05,
                    wobble_period_days: 71.0,
                },
            ],
        }
    }

    fn validate(&self) -> ChartResult<()> {
        if self.days == 0 {
            return Err(ChartError::InvalidConfig(
                "synthetic series needs at least one day".to_owned(),
            ));
        }
        for spec in &self.series {
            if !spec.initial_value.is_finite() || spec.initial_value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "synthetic series `{}` initial value must be finite and > 0",
                    spec.id
                )));
            }
            if !spec.annual_drift.is_finite() || spec.annual_drift <= -1.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "synthetic series `{}` drift must be finite and > -1",
                    spec.id
                )));
            }
            if !spec.wobble_amplitude.is_finite() || !(0.0..1.0).contains(&spec.wobble_amplitude)
            {
                return Err(ChartError::InvalidConfig(format!(
                    "synthetic series `{}` wobble amplitude must be in [0, 1)",
                    spec.id
                )));
            }
            if !spec.wobble_period_days.is_finite() || spec.wobble_period_days <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "synthetic series `{}` wobble period must be finite and > 0",
                    spec.id
                )));
            }
        }
        Ok(())
    }
}

/// Generates one point per day starting at `config.start_ms`.
///
/// Output is a pure function of the config; no clock or randomness.
pub fn generate_synthetic_series(config: &SyntheticSeriesConfig) -> ChartResult<Vec<DataPoint>> {
    config.validate()?;

    let mut points = Vec::with_capacity(config.days as usize);
    for day in 0..config.days {
        let time_ms = i64::from(day)
            .checked_mul(DAY_MS)
            .and_then(|offset| config.start_ms.checked_add(offset))
            .ok_or_else(|| {
                ChartError::InvalidConfig("synthetic series overflows the time range".to_owned())
            })?;

        let elapsed_years = f64::from(day) / 365.0;
        let mut point = DataPoint::new(time_ms);
        for spec in &config.series {
            let trend = spec.initial_value * (1.0 + spec.annual_drift).powf(elapsed_years);
            let phase = TAU * f64::from(day) / spec.wobble_period_days;
            let value = trend * (1.0 + spec.wobble_amplitude * phase.sin());
            point.values.insert(spec.id.clone(), value);
        }
        points.push(point);
    }
    Ok(points)
}
