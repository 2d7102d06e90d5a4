use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::ColorMap;
use crate::core::primitives::format_coordinate;
use crate::core::{ChartKind, ChartSeriesPoint, PlotGeometry, Viewport, build_path_string};
use crate::error::ReportResult;
use crate::render::{
    ChartLayout, CirclePrimitive, Color, PathPrimitive, Primitive, RectPrimitive, RenderFrame,
    Renderer, SvgFragment, SvgRenderer, TextHAlign, TextPrimitive,
};

/// Everything a caller supplies to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub series: Vec<ChartSeriesPoint>,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub width: u32,
    pub height: u32,
    pub x_step: f64,
    pub y_step: f64,
}

impl ChartRequest {
    #[must_use]
    pub fn new(
        series: Vec<ChartSeriesPoint>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        kind: ChartKind,
    ) -> Self {
        Self {
            series,
            x_label: x_label.into(),
            y_label: y_label.into(),
            kind,
            width: 640,
            height: 400,
            x_step: 1.0,
            y_step: 1.0,
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, x_step: f64, y_step: f64) -> Self {
        self.x_step = x_step;
        self.y_step = y_step;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Lays a series out on a chart surface, bottom layer first.
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer<'a> {
    layout: &'a ChartLayout,
}

impl<'a> ChartRenderer<'a> {
    #[must_use]
    pub fn new(layout: &'a ChartLayout) -> Self {
        Self { layout }
    }

    /// Builds the draw commands for `request`.
    ///
    /// Layers, in paint order: background, vertical gridlines, horizontal
    /// gridlines, tick labels, axis titles, plot border, data.
    pub fn build_frame(
        &self,
        request: &ChartRequest,
        colors: &ColorMap,
    ) -> ReportResult<RenderFrame> {
        let viewport = request.viewport();
        let area = self.layout.plot_area(viewport)?;
        let geometry = PlotGeometry::new(
            &plotted_series(request),
            request.x_step,
            request.y_step,
            request.kind.includes_zero(),
            area,
        )?;

        let frame = RenderFrame::new(viewport)
            .with_layer(self.background(viewport))
            .with_layer(self.vertical_gridlines(&geometry)?)
            .with_layer(self.horizontal_gridlines(&geometry)?)
            .with_layer(self.tick_labels(&geometry)?)
            .with_layer(self.axis_titles(request, &geometry))
            .with_layer(self.plot_border(&geometry)?)
            .with_layer(self.data_layer(request, &geometry, colors)?);

        debug!(
            kind = %request.kind,
            points = request.series.len(),
            primitives = frame.primitives.len(),
            "built chart frame"
        );
        Ok(frame)
    }

    fn background(&self, viewport: Viewport) -> Vec<Primitive> {
        vec![Primitive::Rect(
            RectPrimitive::filled(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                Color::css(&self.layout.background_color),
            )
            .with_stroke(Color::css(&self.layout.border_color)),
        )]
    }

    fn vertical_gridlines(&self, geometry: &PlotGeometry) -> ReportResult<Vec<Primitive>> {
        let area = geometry.area;
        let ticks = &geometry.ticks.x;
        let interior = ticks.get(1..ticks.len().saturating_sub(1)).unwrap_or(&[]);

        let mut lines = Vec::with_capacity(interior.len());
        for &tick in interior {
            let x = geometry.x_scale.domain_to_pixel(tick)?;
            let d = build_path_string(&[x, x], &[area.top, area.bottom()], false)?;
            lines.push(Primitive::Path(PathPrimitive::stroked(
                d,
                Color::css(&self.layout.grid_color),
                1.0,
            )));
        }
        Ok(lines)
    }

    fn horizontal_gridlines(&self, geometry: &PlotGeometry) -> ReportResult<Vec<Primitive>> {
        let area = geometry.area;
        let ticks = &geometry.ticks.y;
        let last = ticks.len().saturating_sub(1);

        let mut lines = Vec::with_capacity(ticks.len());
        for (i, &tick) in ticks.iter().enumerate() {
            let is_zero = tick == 0.0;
            // Edge ticks coincide with the border unless they carry the zero line.
            if (i == 0 || i == last) && !is_zero {
                continue;
            }
            let y = geometry.y_scale.domain_to_pixel(tick)?;
            let d = build_path_string(&[area.left, area.right()], &[y, y], false)?;
            let (color, width) = if is_zero {
                (&self.layout.zero_line_color, 2.0)
            } else {
                (&self.layout.grid_color, 1.0)
            };
            lines.push(Primitive::Path(PathPrimitive::stroked(
                d,
                Color::css(color),
                width,
            )));
        }
        Ok(lines)
    }

    fn tick_labels(&self, geometry: &PlotGeometry) -> ReportResult<Vec<Primitive>> {
        let area = geometry.area;
        let gap = self.layout.tick_label_gap;
        let size = self.layout.tick_font_size_px;
        let color = Color::css(&self.layout.text_color);

        let mut labels = Vec::with_capacity(geometry.ticks.x.len() + geometry.ticks.y.len());
        for &tick in &geometry.ticks.x {
            let x = geometry.x_scale.domain_to_pixel(tick)?;
            labels.push(Primitive::Text(TextPrimitive::new(
                format_coordinate(tick),
                x,
                area.bottom() + gap + size,
                size,
                color.clone(),
                TextHAlign::Center,
            )));
        }
        for &tick in &geometry.ticks.y {
            let y = geometry.y_scale.domain_to_pixel(tick)?;
            labels.push(Primitive::Text(TextPrimitive::new(
                format_coordinate(tick),
                area.left - gap,
                y + size * 0.35,
                size,
                color.clone(),
                TextHAlign::Right,
            )));
        }
        Ok(labels)
    }

    fn axis_titles(&self, request: &ChartRequest, geometry: &PlotGeometry) -> Vec<Primitive> {
        let area = geometry.area;
        let size = self.layout.title_font_size_px;
        let color = Color::css(&self.layout.text_color);
        let mut titles = Vec::with_capacity(2);

        if !request.x_label.is_empty() {
            titles.push(Primitive::Text(TextPrimitive::new(
                request.x_label.clone(),
                area.left + area.width / 2.0,
                f64::from(request.height) - size,
                size,
                color.clone(),
                TextHAlign::Center,
            )));
        }
        if !request.y_label.is_empty() {
            titles.push(Primitive::Text(
                TextPrimitive::new(
                    request.y_label.clone(),
                    size + 4.0,
                    area.top + area.height / 2.0,
                    size,
                    color,
                    TextHAlign::Center,
                )
                .rotated(-90.0),
            ));
        }
        titles
    }

    fn plot_border(&self, geometry: &PlotGeometry) -> ReportResult<Vec<Primitive>> {
        let area = geometry.area;
        let d = build_path_string(
            &[area.left, area.right(), area.right(), area.left],
            &[area.top, area.top, area.bottom(), area.bottom()],
            true,
        )?;
        Ok(vec![Primitive::Path(PathPrimitive::stroked(
            d,
            Color::css(&self.layout.axis_color),
            1.0,
        ))])
    }

    fn data_layer(
        &self,
        request: &ChartRequest,
        geometry: &PlotGeometry,
        colors: &ColorMap,
    ) -> ReportResult<Vec<Primitive>> {
        match request.kind {
            ChartKind::Scatter => self.points(&request.series, geometry, colors),
            ChartKind::Line => {
                let mut layer = self.connecting_line(&request.series, geometry, colors)?;
                layer.extend(self.points(&request.series, geometry, colors)?);
                Ok(layer)
            }
            ChartKind::Bar => self.bars(request, geometry, colors),
            ChartKind::Unknown(ref name) => {
                debug!(kind = %name, "unknown chart kind; skipping data layer");
                Ok(Vec::new())
            }
        }
    }

    fn points(
        &self,
        series: &[ChartSeriesPoint],
        geometry: &PlotGeometry,
        colors: &ColorMap,
    ) -> ReportResult<Vec<Primitive>> {
        series
            .iter()
            .map(|point| {
                let fill = colors.lookup(&point.color_key)?;
                let (px, py) = geometry.to_pixels(point.x, point.y)?;
                Ok(Primitive::Circle(CirclePrimitive::new(
                    px,
                    py,
                    self.layout.point_radius,
                    Color::css(fill),
                )))
            })
            .collect()
    }

    fn connecting_line(
        &self,
        series: &[ChartSeriesPoint],
        geometry: &PlotGeometry,
        colors: &ColorMap,
    ) -> ReportResult<Vec<Primitive>> {
        let Some(first) = series.first() else {
            return Ok(Vec::new());
        };
        let stroke = colors.lookup(&first.color_key)?;

        let mut xs = Vec::with_capacity(series.len());
        let mut ys = Vec::with_capacity(series.len());
        for point in series {
            let (px, py) = geometry.to_pixels(point.x, point.y)?;
            xs.push(px);
            ys.push(py);
        }
        let d = build_path_string(&xs, &ys, false)?;
        Ok(vec![Primitive::Path(PathPrimitive::stroked(
            d,
            Color::css(stroke),
            self.layout.line_width,
        ))])
    }

    fn bars(
        &self,
        request: &ChartRequest,
        geometry: &PlotGeometry,
        colors: &ColorMap,
    ) -> ReportResult<Vec<Primitive>> {
        let (x_min, x_max) = geometry.limits.x_range();
        let step_px = request.x_step * geometry.area.width / (x_max - x_min);
        let bar_width = step_px * self.layout.bar_width_ratio;
        let zero_y = geometry.zero_y().unwrap_or(geometry.area.bottom());

        request
            .series
            .iter()
            .map(|point| {
                let fill = colors.lookup(&point.color_key)?;
                // Every bar rises from the zero line, negative values included.
                let (px, py) = geometry.to_pixels(point.x, point.y.abs())?;
                let length = (zero_y - py).max(0.0);
                Ok(Primitive::Rect(RectPrimitive::filled(
                    px - bar_width / 2.0,
                    zero_y - length,
                    bar_width,
                    length,
                    Color::css(fill),
                )))
            })
            .collect()
    }
}

/// Values the axes are fitted to.
///
/// Bars are drawn by magnitude, so their y-axis covers `|y|` rather than
/// the signed values.
fn plotted_series(request: &ChartRequest) -> Cow<'_, [ChartSeriesPoint]> {
    match request.kind {
        ChartKind::Bar => Cow::Owned(
            request
                .series
                .iter()
                .map(|point| ChartSeriesPoint::new(point.x, point.y.abs(), &point.color_key))
                .collect(),
        ),
        _ => Cow::Borrowed(request.series.as_slice()),
    }
}

/// Renders `request` to SVG with the default layout.
pub fn render_chart(request: &ChartRequest, colors: &ColorMap) -> ReportResult<SvgFragment> {
    render_chart_with_layout(request, colors, &ChartLayout::default())
}

pub fn render_chart_with_layout(
    request: &ChartRequest,
    colors: &ColorMap,
    layout: &ChartLayout,
) -> ReportResult<SvgFragment> {
    let frame = ChartRenderer::new(layout).build_frame(request, colors)?;
    SvgRenderer::default().render(&frame)
}
