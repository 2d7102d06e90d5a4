mod chart;
mod frame;
mod layout;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use chart::{ChartRenderer, ChartRequest, render_chart, render_chart_with_layout};
pub use frame::RenderFrame;
pub use layout::ChartLayout;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, PathPrimitive, Primitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_renderer::{SvgFragment, SvgRenderer};

use crate::error::ReportResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from the analytics and layout logic.
pub trait Renderer {
    type Output;

    fn render(&mut self, frame: &RenderFrame) -> ReportResult<Self::Output>;
}
