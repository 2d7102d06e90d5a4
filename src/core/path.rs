use std::fmt::Write as _;

use crate::error::{ReportError, ReportResult};

/// Joins pixel-space points into an SVG path `d` attribute.
///
/// The first point is a move-to, the rest line-tos; `close` appends `Z`.
/// Coordinates use the shortest decimal form that parses back to the same
/// `f64`, so [`parse_path_points`] recovers the input exactly.
pub fn build_path_string(xs: &[f64], ys: &[f64], close: bool) -> ReportResult<String> {
    if xs.len() != ys.len() {
        return Err(ReportError::InvalidInput(format!(
            "path needs matching coordinate lists, got {} x and {} y",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Err(ReportError::InvalidInput(
            "path needs at least one point".to_owned(),
        ));
    }

    let mut path = String::with_capacity(xs.len() * 16);
    for (i, (x, y)) in xs.iter().zip(ys).enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(ReportError::InvalidInput(
                "path coordinates must be finite".to_owned(),
            ));
        }
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(
            path,
            "{command} {},{}",
            without_negative_zero(*x),
            without_negative_zero(*y)
        );
    }
    if close {
        path.push_str(" Z");
    }
    Ok(path)
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Reads back the `x,y` pairs of a path produced by [`build_path_string`].
///
/// Command letters are skipped.
pub fn parse_path_points(path: &str) -> ReportResult<Vec<(f64, f64)>> {
    let mut points = Vec::new();
    for token in path.split_whitespace() {
        if token.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        let (x, y) = token.split_once(',').ok_or_else(|| {
            ReportError::InvalidInput(format!("malformed path coordinate `{token}`"))
        })?;
        let parse = |raw: &str| {
            raw.parse::<f64>().map_err(|err| {
                ReportError::InvalidInput(format!("malformed path number `{raw}`: {err}"))
            })
        };
        points.push((parse(x)?, parse(y)?));
    }
    Ok(points)
}
