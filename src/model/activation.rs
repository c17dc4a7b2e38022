/// Logistic sigmoid
pub fn sigmoid(z: f64) -> f64 {
    (1f64 + (-z).exp()).recip()
}

/// Slope of the sigmoid expressed through its own output.
/// `a` must already be a sigmoid activation, not the pre-activation input.
pub fn sigmoid_derivative_from_output(a: f64) -> f64 {
    a * (1f64 - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sigmoid_at_zero() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn test_sigmoid_symmetry() {
        assert_abs_diff_eq!(sigmoid(2.0) + sigmoid(-2.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_peak() {
        assert_eq!(sigmoid_derivative_from_output(0.5), 0.25);
        assert_abs_diff_eq!(
            sigmoid_derivative_from_output(sigmoid(1.3)),
            sigmoid(1.3) * (1.0 - sigmoid(1.3)),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_sigmoid_saturates_in_closed_interval() {
        assert_eq!(sigmoid(40.0), 1.0);
        assert!(sigmoid(-40.0) > 0.0);
        for x in [-1e308, -800.0, 800.0, 1e308] {
            let s = sigmoid(x);
            assert!((0.0..=1.0).contains(&s));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Above about x = 36.7 the f64 result rounds to exactly 1
        #[test]
        fn prop_sigmoid_in_open_unit_interval(x in -30.0f64..30.0) {
            let s = sigmoid(x);
            prop_assert!(s > 0.0 && s < 1.0);
        }

        #[test]
        fn prop_derivative_bounded(a in 1e-9f64..(1.0 - 1e-9)) {
            let d = sigmoid_derivative_from_output(a);
            prop_assert_eq!(d, a * (1.0 - a));
            prop_assert!(d > 0.0 && d <= 0.25);
        }
    }
}
