use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// CSS color value, e.g. `#33a02c` or `cornflowerblue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn css(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.0.is_empty() {
            return Err(ReportError::InvalidInput("color must not be empty".to_owned()));
        }
        if self
            .0
            .chars()
            .any(|c| matches!(c, '"' | '\'' | '<' | '>' | '&'))
        {
            return Err(ReportError::InvalidInput(format!(
                "color `{}` contains markup characters",
                self.0
            )));
        }
        Ok(())
    }
}

fn validate_finite(values: &[f64], what: &str) -> ReportResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ReportError::InvalidInput(format!(
            "{what} coordinates must be finite"
        )))
    }
}

/// Stroked (and optionally filled) path in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    /// SVG path data, see [`crate::core::build_path_string`].
    pub d: String,
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Option<Color>,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(d: impl Into<String>, stroke: Color, stroke_width: f64) -> Self {
        Self {
            d: d.into(),
            stroke,
            stroke_width,
            fill: None,
        }
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.d.is_empty() {
            return Err(ReportError::InvalidInput(
                "path data must not be empty".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ReportError::InvalidInput(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        match &self.fill {
            Some(fill) => fill.validate(),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
}

impl RectPrimitive {
    #[must_use]
    pub fn filled(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(&self) -> ReportResult<()> {
        validate_finite(&[self.x, self.y, self.width, self.height], "rect")?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ReportError::InvalidInput(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        match &self.stroke {
            Some(stroke) => stroke.validate(),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
        }
    }

    pub fn validate(&self) -> ReportResult<()> {
        validate_finite(&[self.cx, self.cy], "circle")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ReportError::InvalidInput(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

impl TextHAlign {
    #[must_use]
    pub fn text_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// One label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Rotation in degrees around `(x, y)`.
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.text.is_empty() {
            return Err(ReportError::InvalidInput(
                "text primitive must not be empty".to_owned(),
            ));
        }
        validate_finite(&[self.x, self.y, self.rotation_deg], "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ReportError::InvalidInput(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Path(PathPrimitive),
    Rect(RectPrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ReportResult<()> {
        match self {
            Self::Path(path) => path.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}
