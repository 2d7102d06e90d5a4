use luck_report::core::{
    ChartSeriesPoint, build_path_string, compute_axis_limits, compute_ticks, parse_path_points,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

proptest! {
    #[test]
    fn path_round_trip_property(
        points in prop::collection::vec((finite(), finite()), 1..64),
        close in any::<bool>()
    ) {
        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();

        let d = build_path_string(&xs, &ys, close).expect("path");
        prop_assert!(d.starts_with("M "));
        prop_assert_eq!(d.ends_with(" Z"), close);

        let parsed = parse_path_points(&d).expect("parse");
        prop_assert_eq!(parsed.len(), points.len());
        for (got, want) in parsed.iter().zip(&points) {
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn axis_limits_strictly_contain_the_data(
        values in prop::collection::vec((-200.0f64..200.0, -200.0f64..200.0), 1..32),
        x_step in 1.0f64..50.0,
        y_step in 1.0f64..50.0,
        include_zero in any::<bool>()
    ) {
        let series: Vec<ChartSeriesPoint> = values
            .iter()
            .map(|&(x, y)| ChartSeriesPoint::new(x, y, "team"))
            .collect();
        let limits = compute_axis_limits(&series, x_step, y_step, include_zero).expect("limits");

        for &(x, y) in &values {
            prop_assert!(limits.x_min < x && x < limits.x_max);
            prop_assert!(limits.y_min < y && y < limits.y_max);
        }
        if include_zero {
            prop_assert!(limits.y_min <= 0.0 && limits.y_max >= 0.0);
        }

        let ticks = compute_ticks(limits, x_step, y_step).expect("ticks");
        prop_assert!(ticks.x.len() >= 2);
        prop_assert!(ticks.y.len() >= 2);
        prop_assert!(ticks.x.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ticks.y.windows(2).all(|w| w[0] < w[1]));
    }
}
