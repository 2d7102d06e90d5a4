use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a point figure to two decimals for display.
///
/// Goes through `Decimal` so values like `2.675` round the way they read
/// rather than the way they are stored in binary. Non-finite values are
/// returned unchanged.
#[must_use]
pub fn round_points(value: f64) -> f64 {
    round_to_places(value, 2)
}

#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    let rounded = round_to_places(value, 2);
    let normalized = if rounded == 0.0 { 0.0 } else { rounded };
    match Decimal::from_f64(normalized) {
        Some(d) => d.normalize().to_string(),
        None => format!("{normalized}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_points_uses_decimal_midpoint() {
        assert_eq!(round_points(2.675), 2.68);
        assert_eq!(round_points(-1.005), -1.01);
        assert_eq!(round_points(10.0), 10.0);
    }

    #[test]
    fn format_coordinate_trims_zeros() {
        assert_eq!(format_coordinate(10.0), "10");
        assert_eq!(format_coordinate(10.5), "10.5");
        assert_eq!(format_coordinate(3.14159), "3.14");
        assert_eq!(format_coordinate(-0.001), "0");
    }
}
