use serde::Serialize;

use super::super::{
    layer_priority, sanitize, BreakdownTerm, CalculatorDecorator, SportsCalculator,
};

/// Annotates breakdowns with the death count. Numbers pass through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DeathDecorator;

impl DeathDecorator {
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorDecorator for DeathDecorator {
    fn name(&self) -> &'static str {
        "DeathDecorator"
    }

    fn priority(&self) -> u32 {
        layer_priority::DEATHS
    }

    fn explain(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> Vec<BreakdownTerm> {
        let mut terms = inner.explain(sport, game, deaths);
        terms.push(BreakdownTerm::Deaths {
            count: sanitize(deaths),
        });
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::decorators::test_utils::sample_base;

    #[test]
    fn numbers_pass_through() {
        let base = sample_base();
        let decorator = DeathDecorator::new();

        assert_eq!(decorator.get(&base, "pushup", "league"), base.get("pushup", "league"));
        assert_eq!(
            decorator.calculate_amount(&base, "pushup", "league", 5.0),
            base.calculate_amount("pushup", "league", 5.0)
        );
        assert_eq!(
            decorator.calculate_deaths(&base, "pushup", "league", 60.0),
            base.calculate_deaths("pushup", "league", 60.0)
        );
    }

    #[test]
    fn appends_deaths_term() {
        let base = sample_base();
        let terms = DeathDecorator::new().explain(&base, "pushup", "league", 5.0);

        assert_eq!(terms.len(), 2);
        assert_eq!(terms[1], BreakdownTerm::Deaths { count: 5.0 });
    }
}
