/// Maps a slider position to a multiplier and back.
pub trait RatingCalculator {
    fn rate(&self, x: f64) -> f64;
    fn reverse(&self, y: Option<f64>) -> Option<f64>;
}

/// Piecewise linear curve from `[0, 1]` onto `[0, 3]` with the midpoint at 1,
/// so the left half of a slider scales down and the right half scales up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rating0To3;

impl RatingCalculator for Rating0To3 {
    fn rate(&self, x: f64) -> f64 {
        if x <= 0.5 {
            x * 2.0
        } else {
            1.0 + (x - 0.5) * 4.0
        }
    }

    fn reverse(&self, y: Option<f64>) -> Option<f64> {
        let y = y?;
        if y <= 1.0 {
            Some(y / 2.0)
        } else {
            Some((y - 1.0) / 4.0 + 0.5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.25, 0.5)]
    #[case(0.5, 1.0)]
    #[case(0.8, 2.2)]
    #[case(1.0, 3.0)]
    fn rates_and_reverses(#[case] x: f64, #[case] y: f64) {
        let calculator = Rating0To3;
        let rated = calculator.rate(x);

        assert!((rated - y).abs() < 1e-9, "rate({x}) = {rated}, expected {y}");
        let reversed = calculator.reverse(Some(rated)).unwrap();
        assert!((reversed - x).abs() < 1e-9, "reverse({rated}) = {reversed}");
    }

    #[test]
    fn reverse_of_nothing_is_nothing() {
        assert_eq!(Rating0To3.reverse(None), None);
    }
}
