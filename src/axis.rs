//! Axis extent and gridline-stop policies.
//!
//! The default extent policy rounds data bounds outward to "nice" numbers
//! at their own order of magnitude; the default stop policy places the
//! three interior quarter points. Both are pluggable at the entry point.

/// Direction for order-of-magnitude rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundDirection {
    /// Round the magnitude toward zero (floor).
    Down,
    /// Round the magnitude away from zero (ceil).
    Up,
}

// Counteracts floating-point boundary error in the log10 before flooring,
// e.g. log10(1000) landing a hair under 3.
const OOM_EPSILON: f64 = 1e-8;

/// Round to the nearest integer multiple of the value's own power of ten.
///
/// `0.0734` rounds down to `0.07` and up to `0.08`; `734` rounds down to
/// `700` and up to `800`. Zero maps to zero. Negative numbers are rounded
/// by magnitude and then re-signed, so `round(-734, Down)` floors the
/// magnitude to `700` and negates to `-700`.
#[must_use]
pub fn round(n: f64, direction: RoundDirection) -> f64 {
    if n == 0.0 {
        return 0.0;
    }

    let magnitude = n.abs();
    let oom = (magnitude.log10() + OOM_EPSILON).floor();
    let unit = 10f64.powf(oom);

    let rounded = match direction {
        RoundDirection::Down => (magnitude / unit).floor() * unit,
        RoundDirection::Up => (magnitude / unit).ceil() * unit,
    };

    if n < 0.0 {
        -rounded
    } else {
        rounded
    }
}

/// Default extent policy: data bounds rounded outward to nice numbers.
///
/// Non-finite values never reach this point (rows are filtered first); an
/// empty slice yields an infinite extent that draws as nothing.
#[must_use]
pub fn nice_extent(values: &[f64]) -> [f64; 2] {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    [round(min, RoundDirection::Down), round(max, RoundDirection::Up)]
}

/// Default stop policy: the three interior quarter points of an extent.
#[must_use]
pub fn quarter_stops(extent: [f64; 2]) -> Vec<f64> {
    [0.25, 0.5, 0.75]
        .iter()
        .map(|k| extent[0] + k * (extent[1] - extent[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_fractional() {
        assert_relative_eq!(round(0.0734, RoundDirection::Down), 0.07);
        assert_relative_eq!(round(0.0734, RoundDirection::Up), 0.08);
    }

    #[test]
    fn test_round_integral() {
        assert_relative_eq!(round(734.0, RoundDirection::Down), 700.0);
        assert_relative_eq!(round(734.0, RoundDirection::Up), 800.0);
    }

    #[test]
    fn test_round_zero() {
        assert_relative_eq!(round(0.0, RoundDirection::Down), 0.0);
        assert_relative_eq!(round(0.0, RoundDirection::Up), 0.0);
    }

    #[test]
    fn test_round_exact_power_of_ten() {
        // The epsilon keeps log10(1000) from flooring to 2.
        assert_relative_eq!(round(1000.0, RoundDirection::Down), 1000.0);
        assert_relative_eq!(round(0.1, RoundDirection::Down), 0.1);
    }

    #[test]
    fn test_round_negative_by_magnitude() {
        // Magnitude is floored/ceiled first, then the sign is restored.
        assert_relative_eq!(round(-734.0, RoundDirection::Down), -700.0);
        assert_relative_eq!(round(-734.0, RoundDirection::Up), -800.0);
        assert_relative_eq!(round(-0.0734, RoundDirection::Down), -0.07);
    }

    #[test]
    fn test_nice_extent() {
        let extent = nice_extent(&[0.12, 0.34, 0.87]);
        assert_relative_eq!(extent[0], 0.1);
        assert_relative_eq!(extent[1], 0.9);
    }

    #[test]
    fn test_quarter_stops() {
        let stops = quarter_stops([0.0, 100.0]);
        assert_eq!(stops, vec![25.0, 50.0, 75.0]);
    }

    #[test]
    fn test_quarter_stops_offset_extent() {
        let stops = quarter_stops([10.0, 30.0]);
        assert_eq!(stops, vec![15.0, 20.0, 25.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rounding down never exceeds the magnitude; up never undershoots.
        #[test]
        fn prop_round_brackets_magnitude(n in 1e-6f64..1e9) {
            let down = round(n, RoundDirection::Down);
            let up = round(n, RoundDirection::Up);
            prop_assert!(down <= n * (1.0 + 1e-9));
            prop_assert!(up >= n * (1.0 - 1e-9));
        }

        /// Quarter stops always lie strictly inside a non-empty extent.
        #[test]
        fn prop_quarter_stops_interior(lo in -1e6f64..1e6, span in 1e-3f64..1e6) {
            let stops = quarter_stops([lo, lo + span]);
            prop_assert_eq!(stops.len(), 3);
            for s in stops {
                prop_assert!(s > lo && s < lo + span);
            }
        }
    }
}
