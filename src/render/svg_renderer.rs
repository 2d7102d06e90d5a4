use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::format_coordinate;
use crate::error::ReportResult;
use crate::render::{
    CirclePrimitive, PathPrimitive, Primitive, RectPrimitive, RenderFrame, Renderer,
    TextPrimitive,
};

/// Self-contained `<svg>` markup ready to embed in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SvgFragment(String);

impl SvgFragment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SvgFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes frames as inline SVG with every style carried on the element.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub font_family: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_owned(),
        }
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn c(value: f64) -> String {
    format_coordinate(value)
}

fn write_path(svg: &mut String, path: &PathPrimitive) {
    let fill = path.fill.as_ref().map_or("none", |f| f.as_str());
    let _ = write!(
        svg,
        r#"<path d="{}" fill="{fill}" stroke="{}" stroke-width="{}"/>"#,
        path.d,
        path.stroke.as_str(),
        c(path.stroke_width)
    );
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) {
    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        c(rect.x),
        c(rect.y),
        c(rect.width),
        c(rect.height),
        rect.fill.as_str()
    );
    if let Some(stroke) = &rect.stroke {
        let _ = write!(svg, r#" stroke="{}""#, stroke.as_str());
    }
    svg.push_str("/>");
}

fn write_circle(svg: &mut String, circle: &CirclePrimitive) {
    let _ = write!(
        svg,
        r##"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="#ffffff" stroke-width="1"/>"##,
        c(circle.cx),
        c(circle.cy),
        c(circle.radius),
        circle.fill.as_str()
    );
}

fn write_text(svg: &mut String, text: &TextPrimitive) {
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}""#,
        c(text.x),
        c(text.y),
        c(text.font_size_px),
        text.color.as_str(),
        text.h_align.text_anchor()
    );
    if text.rotation_deg != 0.0 {
        let _ = write!(
            svg,
            r#" transform="rotate({},{},{})""#,
            c(text.rotation_deg),
            c(text.x),
            c(text.y)
        );
    }
    let _ = write!(svg, ">{}</text>", escape_xml(&text.text));
}

impl Renderer for SvgRenderer {
    type Output = SvgFragment;

    fn render(&mut self, frame: &RenderFrame) -> ReportResult<SvgFragment> {
        frame.validate()?;

        let (width, height) = (frame.viewport.width, frame.viewport.height);
        let mut svg = String::with_capacity(256 + frame.primitives.len() * 96);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}">"#,
            escape_xml(&self.font_family)
        );
        for primitive in &frame.primitives {
            match primitive {
                Primitive::Path(path) => write_path(&mut svg, path),
                Primitive::Rect(rect) => write_rect(&mut svg, rect),
                Primitive::Circle(circle) => write_circle(&mut svg, circle),
                Primitive::Text(text) => write_text(&mut svg, text),
            }
        }
        svg.push_str("</svg>");

        trace!(
            primitives = frame.primitives.len(),
            bytes = svg.len(),
            "rendered svg"
        );
        Ok(SvgFragment(svg))
    }
}
