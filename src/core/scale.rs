use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Linear data-to-pixel mapping for one chart axis.
///
/// `origin_px` is the pixel where the plot area starts and `span_px` its
/// length. With `inverted` the domain start lands on the far end, which is
/// what a y-axis needs since pixel-y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    origin_px: f64,
    span_px: f64,
    inverted: bool,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        origin_px: f64,
        span_px: f64,
        inverted: bool,
    ) -> ReportResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ReportError::DegenerateRange(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !origin_px.is_finite() || !span_px.is_finite() || span_px <= 0.0 {
            return Err(ReportError::DegenerateRange(
                "pixel span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            origin_px,
            span_px,
            inverted,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ReportResult<f64> {
        if !value.is_finite() {
            return Err(ReportError::InvalidInput("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        let offset = if self.inverted {
            self.span_px - normalized * self.span_px
        } else {
            normalized * self.span_px
        };
        Ok(self.origin_px + offset)
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ReportResult<f64> {
        if !pixel.is_finite() {
            return Err(ReportError::InvalidInput("pixel must be finite".to_owned()));
        }

        let offset = pixel - self.origin_px;
        let normalized = if self.inverted {
            (self.span_px - offset) / self.span_px
        } else {
            offset / self.span_px
        };
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Maps one data value into pixel space.
///
/// `limits` is the `(min, max)` data range of the axis.
pub fn map_to_pixels(
    value: f64,
    limits: (f64, f64),
    pixel_span: f64,
    origin_pixel: f64,
    invert: bool,
) -> ReportResult<f64> {
    LinearScale::new(limits.0, limits.1, origin_pixel, pixel_span, invert)?.domain_to_pixel(value)
}
