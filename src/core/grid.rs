use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::ChartSeriesPoint;
use crate::error::{ReportError, ReportResult};

/// Share of a step the data must clear before a gridline may sit under it.
pub const DEFAULT_MIN_FRACTION: f64 = 0.1;

const MAX_TICKS_PER_AXIS: usize = 1_000;
const GRID_SNAP_EPSILON: f64 = 1e-9;

/// Data-space bounds of a chart, always wider than the data on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisLimits {
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Pixel rectangle that holds the plotted data, excluding margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

fn validate_step(step: f64, axis: &str) -> ReportResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ReportError::DegenerateRange(format!(
            "{axis} step must be finite and > 0, got {step}"
        )));
    }
    Ok(())
}

/// Quotient `value / step`, snapped to the nearest integer when float noise
/// is the only thing keeping it off the grid.
fn grid_quotient(value: f64, step: f64) -> f64 {
    let quotient = value / step;
    let nearest = quotient.round();
    if (quotient - nearest).abs() < GRID_SNAP_EPSILON {
        nearest
    } else {
        quotient
    }
}

/// Floors `value` to a multiple of `step`, dropping one more line when the
/// value sits within `min_fraction * step` of the floor.
pub fn round_down_to_grid(value: f64, step: f64, min_fraction: f64) -> ReportResult<f64> {
    validate_step(step, "grid")?;
    if !value.is_finite() {
        return Err(ReportError::InvalidInput(
            "grid value must be finite".to_owned(),
        ));
    }

    let floored = grid_quotient(value, step).floor() * step;
    if value - floored < min_fraction * step {
        Ok(floored - step)
    } else {
        Ok(floored)
    }
}

/// Ceils `value` to a multiple of `step`, adding one more line when the
/// value sits within `min_fraction * step` of the ceiling.
pub fn round_up_to_grid(value: f64, step: f64, min_fraction: f64) -> ReportResult<f64> {
    validate_step(step, "grid")?;
    if !value.is_finite() {
        return Err(ReportError::InvalidInput(
            "grid value must be finite".to_owned(),
        ));
    }

    let ceiled = grid_quotient(value, step).ceil() * step;
    if ceiled - value < min_fraction * step {
        Ok(ceiled + step)
    } else {
        Ok(ceiled)
    }
}

fn axis_limits(lo: f64, hi: f64, step: f64) -> ReportResult<(f64, f64)> {
    if lo == hi {
        // Collapsed range: keep a full step of room on both sides of the value.
        return Ok((
            round_down_to_grid(lo - step, step, DEFAULT_MIN_FRACTION)?,
            round_up_to_grid(hi + step, step, DEFAULT_MIN_FRACTION)?,
        ));
    }
    Ok((
        round_down_to_grid(lo, step, DEFAULT_MIN_FRACTION)?,
        round_up_to_grid(hi, step, DEFAULT_MIN_FRACTION)?,
    ))
}

/// Computes rounded chart bounds for a series.
///
/// With `include_zero` the y-range is stretched to contain 0 so bars have a
/// baseline.
pub fn compute_axis_limits(
    series: &[ChartSeriesPoint],
    x_step: f64,
    y_step: f64,
    include_zero: bool,
) -> ReportResult<AxisLimits> {
    validate_step(x_step, "x")?;
    validate_step(y_step, "y")?;
    if series.is_empty() {
        return Err(ReportError::InvalidInput(
            "cannot compute axis limits for an empty series".to_owned(),
        ));
    }

    let mut x_lo = f64::INFINITY;
    let mut x_hi = f64::NEG_INFINITY;
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;
    for point in series {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ReportError::InvalidInput(format!(
                "series point for `{}` must be finite",
                point.color_key
            )));
        }
        x_lo = x_lo.min(point.x);
        x_hi = x_hi.max(point.x);
        y_lo = y_lo.min(point.y);
        y_hi = y_hi.max(point.y);
    }

    let (x_min, x_max) = axis_limits(x_lo, x_hi, x_step)?;
    let (mut y_min, mut y_max) = axis_limits(y_lo, y_hi, y_step)?;
    if include_zero {
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
    }

    Ok(AxisLimits {
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

fn axis_ticks(min: f64, max: f64, step: f64) -> ReportResult<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(ReportError::DegenerateRange(format!(
            "axis range [{min}, {max}] is empty"
        )));
    }

    let count = ((max - min) / step).round();
    if count >= MAX_TICKS_PER_AXIS as f64 {
        return Err(ReportError::DegenerateRange(format!(
            "step {step} yields more than {MAX_TICKS_PER_AXIS} ticks over [{min}, {max}]"
        )));
    }

    let count = count as usize;
    let base = grid_quotient(min, step);
    Ok((0..=count)
        .map(|i| {
            let tick = (base + i as f64) * step;
            if tick == 0.0 { 0.0 } else { tick }
        })
        .collect())
}

/// Lists tick values from min to max inclusive for both axes.
pub fn compute_ticks(limits: AxisLimits, x_step: f64, y_step: f64) -> ReportResult<AxisTicks> {
    validate_step(x_step, "x")?;
    validate_step(y_step, "y")?;
    Ok(AxisTicks {
        x: axis_ticks(limits.x_min, limits.x_max, x_step)?,
        y: axis_ticks(limits.y_min, limits.y_max, y_step)?,
    })
}

/// Everything needed to place one series on a plot surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub limits: AxisLimits,
    pub ticks: AxisTicks,
    pub area: PlotArea,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl PlotGeometry {
    pub fn new(
        series: &[ChartSeriesPoint],
        x_step: f64,
        y_step: f64,
        include_zero: bool,
        area: PlotArea,
    ) -> ReportResult<Self> {
        let limits = compute_axis_limits(series, x_step, y_step, include_zero)?;
        let ticks = compute_ticks(limits, x_step, y_step)?;
        let x_scale = LinearScale::new(limits.x_min, limits.x_max, area.left, area.width, false)?;
        let y_scale = LinearScale::new(limits.y_min, limits.y_max, area.top, area.height, true)?;

        Ok(Self {
            limits,
            ticks,
            area,
            x_scale,
            y_scale,
        })
    }

    /// Maps a data point to `(px, py)`.
    pub fn to_pixels(&self, x: f64, y: f64) -> ReportResult<(f64, f64)> {
        Ok((
            self.x_scale.domain_to_pixel(x)?,
            self.y_scale.domain_to_pixel(y)?,
        ))
    }

    /// Pixel-y of the zero line, when zero lies inside the y-range.
    #[must_use]
    pub fn zero_y(&self) -> Option<f64> {
        if self.limits.y_min <= 0.0 && self.limits.y_max >= 0.0 {
            self.y_scale.domain_to_pixel(0.0).ok()
        } else {
            None
        }
    }
}
