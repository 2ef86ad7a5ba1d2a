/// `numerator / denominator`, or `None` when the denominator is zero.
pub fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    match denominator {
        positive if positive > 0 => Some(numerator as f64 / positive as f64),
        _ => None,
    }
}

/// Relative comparison in the style of `pytest.approx(expected, rel=..)`.
/// An expected value of exactly zero only matches zero.
pub fn approx_eq_rel(actual: f64, expected: f64, rel: f64) -> bool {
    match expected {
        zero if zero == 0.0 => actual == 0.0,
        _ => (actual - expected).abs() <= rel * expected.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(10, 4), Some(2.5));
        assert_eq!(ratio(0, 3), Some(0.0));
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(5, 0), None);
        assert_eq!(ratio(0, 0), None);
    }

    #[test]
    fn test_approx_eq_rel() {
        assert!(approx_eq_rel(11.35, 11.30, 0.01));
        assert!(!approx_eq_rel(11.5, 11.30, 0.01));
        assert!(approx_eq_rel(-0.381, -0.38, 0.01));
    }

    #[test]
    fn test_approx_eq_rel_zero_expected() {
        assert!(approx_eq_rel(0.0, 0.0, 0.01));
        assert!(!approx_eq_rel(0.001, 0.0, 0.01));
    }
}
