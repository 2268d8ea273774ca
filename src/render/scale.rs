//! "Nice number" axis scaling for the bar chart
//!
//! Picks a human-friendly Y-axis ceiling so tick labels land on round
//! values: the smallest of {1, 2, 5, 10} × 10^e that covers the raw
//! maximum.

/// Fixed number of labeled ticks on the Y axis
pub const TICK_COUNT: usize = 5;

/// Smallest value of the form {1,2,5,10} × 10^e that is >= `raw_max`.
///
/// `raw_max` must be positive; callers clamp their maxima to at least 1
/// before scaling.
pub fn nice_ceiling(raw_max: f64) -> f64 {
    let exp = raw_max.log10().floor();
    let frac = raw_max / 10f64.powf(exp);

    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * 10f64.powf(exp)
}

/// Distance between adjacent ticks for a given axis ceiling
pub fn tick_step(y_max: f64) -> f64 {
    y_max / (TICK_COUNT - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ceiling_42_is_50() {
        // exp = 1, frac = 4.2, smallest of {1,2,5,10} >= 4.2 is 5
        assert_eq!(nice_ceiling(42.0), 50.0);
    }

    #[test]
    fn test_nice_ceiling_round_values_are_fixed_points() {
        assert_eq!(nice_ceiling(1.0), 1.0);
        assert_eq!(nice_ceiling(10.0), 10.0);
        assert_eq!(nice_ceiling(20.0), 20.0);
        assert_eq!(nice_ceiling(500.0), 500.0);
    }

    #[test]
    fn test_nice_ceiling_band_edges() {
        assert_eq!(nice_ceiling(2.0), 2.0);
        assert_eq!(nice_ceiling(2.1), 5.0);
        assert_eq!(nice_ceiling(5.0), 5.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(11.0), 20.0);
    }

    #[test]
    fn test_nice_ceiling_fractional_input() {
        // exp = -1, frac = 4.2 -> 5 * 10^-1
        assert!((nice_ceiling(0.42) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_nice_ceiling_covers_raw_max() {
        for raw in [1.0, 3.0, 7.5, 9.99, 42.0, 137.0, 999.0, 1001.0, 0.08] {
            let ceiling = nice_ceiling(raw);
            assert!(
                ceiling >= raw,
                "nice_ceiling({}) = {} is below the input",
                raw,
                ceiling
            );

            // the result must be k * 10^e with k in {1,2,5,10}
            let exp = ceiling.log10().floor();
            let frac = ceiling / 10f64.powf(exp);
            let is_nice = [1.0, 2.0, 5.0, 10.0]
                .iter()
                .any(|k| (frac - k).abs() < 1e-9);
            assert!(is_nice, "nice_ceiling({}) = {} is not nice", raw, ceiling);
        }
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(50.0), 12.5);
        assert_eq!(tick_step(20.0), 5.0);
    }
}
