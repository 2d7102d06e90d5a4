use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ReportError, ReportResult};

/// Fixed chart margins, sizes and palette.
///
/// The margins leave room for tick labels and axis titles so neither ever
/// overlaps the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub tick_label_gap: f64,
    pub tick_font_size_px: f64,
    pub title_font_size_px: f64,
    pub point_radius: f64,
    /// Bar width as a share of one x-step.
    pub bar_width_ratio: f64,
    pub line_width: f64,
    pub background_color: String,
    pub border_color: String,
    pub grid_color: String,
    pub zero_line_color: String,
    pub axis_color: String,
    pub text_color: String,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            margin_top: 20.0,
            margin_right: 20.0,
            margin_bottom: 50.0,
            margin_left: 60.0,
            tick_label_gap: 6.0,
            tick_font_size_px: 11.0,
            title_font_size_px: 12.0,
            point_radius: 5.0,
            bar_width_ratio: 0.6,
            line_width: 2.0,
            background_color: "#ffffff".to_owned(),
            border_color: "#d0d0d0".to_owned(),
            grid_color: "#e6e6e6".to_owned(),
            zero_line_color: "#555555".to_owned(),
            axis_color: "#333333".to_owned(),
            text_color: "#333333".to_owned(),
        }
    }
}

impl ChartLayout {
    /// Plot rectangle inside `viewport` once margins are removed.
    pub fn plot_area(&self, viewport: Viewport) -> ReportResult<PlotArea> {
        let width = f64::from(viewport.width) - self.margin_left - self.margin_right;
        let height = f64::from(viewport.height) - self.margin_top - self.margin_bottom;
        if !viewport.is_valid() || width <= 0.0 || height <= 0.0 {
            return Err(ReportError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(PlotArea {
            left: self.margin_left,
            top: self.margin_top,
            width,
            height,
        })
    }
}
