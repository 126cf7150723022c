use serde::Serialize;

use super::super::{
    layer_priority, sanitize, to_count, BreakdownTerm, CalculatorDecorator, SportsCalculator,
};

/// Freeform mode: the user types the exercise count, so every calculation
/// collapses to 1 regardless of the layers below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExactlyOneDecorator;

impl ExactlyOneDecorator {
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorDecorator for ExactlyOneDecorator {
    fn name(&self) -> &'static str {
        "ExactlyOneDecorator"
    }

    fn priority(&self) -> u32 {
        layer_priority::EXACTLY_ONE
    }

    fn get(&self, _inner: &dyn SportsCalculator, _sport: &str, _game: &str) -> f64 {
        1.0
    }

    fn calculate_amount(
        &self,
        _inner: &dyn SportsCalculator,
        _sport: &str,
        _game: &str,
        _deaths: f64,
    ) -> u32 {
        1
    }

    // rate 1: the typed count is the count
    fn calculate_deaths(
        &self,
        _inner: &dyn SportsCalculator,
        _sport: &str,
        _game: &str,
        amount: f64,
    ) -> u32 {
        to_count(sanitize(amount))
    }

    fn explain(
        &self,
        _inner: &dyn SportsCalculator,
        _sport: &str,
        _game: &str,
        _deaths: f64,
    ) -> Vec<BreakdownTerm> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::decorators::test_utils::sample_base;
    use rstest::rstest;

    #[rstest]
    #[case("pushup", "league", 0.0)]
    #[case("pushup", "league", 5.0)]
    #[case("plank", "pubg", 12.0)]
    #[case("unknown", "custom", 3.0)]
    fn always_one(#[case] sport: &str, #[case] game: &str, #[case] deaths: f64) {
        let base = sample_base();
        let decorator = ExactlyOneDecorator::new();

        assert_eq!(decorator.get(&base, sport, game), 1.0);
        assert_eq!(decorator.calculate_amount(&base, sport, game, deaths), 1);
    }

    #[test]
    fn inverse_returns_the_amount() {
        let base = sample_base();
        let decorator = ExactlyOneDecorator::new();
        assert_eq!(decorator.calculate_deaths(&base, "pushup", "custom", 7.0), 7);
        assert_eq!(decorator.calculate_deaths(&base, "pushup", "custom", -1.0), 0);
    }

    #[test]
    fn has_nothing_to_explain() {
        let base = sample_base();
        assert!(ExactlyOneDecorator::new()
            .explain(&base, "pushup", "custom", 5.0)
            .is_empty());
    }
}
