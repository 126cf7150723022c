use serde::Serialize;

use super::super::{layer_priority, BreakdownTerm, CalculatorDecorator, SportsCalculator};
use crate::models::OverrideSportDefinition;

/// Replaces `sport_base * game_base` with a user-defined rate for exact
/// (sport, game) pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverrideSportDecorator {
    overrides: Vec<OverrideSportDefinition>,
}

impl OverrideSportDecorator {
    pub fn new(overrides: Vec<OverrideSportDefinition>) -> Self {
        Self { overrides }
    }

    /// First matching override. Duplicates are a caller error.
    pub fn get_override(&self, sport: &str, game: &str) -> Option<&OverrideSportDefinition> {
        self.overrides
            .iter()
            .find(|entry| entry.sport == sport && entry.game == game)
    }
}

impl CalculatorDecorator for OverrideSportDecorator {
    fn name(&self) -> &'static str {
        "OverrideSportDecorator"
    }

    fn priority(&self) -> u32 {
        layer_priority::OVERRIDE
    }

    fn get(&self, inner: &dyn SportsCalculator, sport: &str, game: &str) -> f64 {
        match self.get_override(sport, game) {
            Some(entry) => entry.amount,
            None => inner.get(sport, game),
        }
    }

    fn explain(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> Vec<BreakdownTerm> {
        match self.get_override(sport, game) {
            Some(entry) => vec![BreakdownTerm::Override {
                sport: entry.sport.clone(),
                game: entry.game.clone(),
                amount: entry.amount,
            }],
            None => inner.explain(sport, game, deaths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::decorators::test_utils::sample_base;

    fn definition(sport: &str, game: &str, amount: f64) -> OverrideSportDefinition {
        OverrideSportDefinition {
            sport: sport.to_string(),
            game: game.to_string(),
            amount,
        }
    }

    #[test]
    fn override_replaces_rate_for_exact_pair() {
        let base = sample_base();
        let decorator = OverrideSportDecorator::new(vec![definition("pushup", "pubg", 6.0)]);

        assert_eq!(decorator.get(&base, "pushup", "pubg"), 6.0);
        assert_eq!(decorator.calculate_amount(&base, "pushup", "pubg", 5.0), 30);
        assert_eq!(decorator.calculate_deaths(&base, "pushup", "pubg", 30.0), 5);
    }

    #[test]
    fn other_pairs_pass_through() {
        let base = sample_base();
        let decorator = OverrideSportDecorator::new(vec![definition("pushup", "pubg", 6.0)]);

        assert_eq!(decorator.get(&base, "pushup", "league"), 12.0);
        assert_eq!(decorator.get(&base, "legraises", "pubg"), 20.0);
    }

    #[test]
    fn table_lookups_are_untouched() {
        let base = sample_base();
        let decorator = OverrideSportDecorator::new(vec![definition("pushup", "pubg", 6.0)]);

        assert_eq!(decorator.get_sport_base(&base, "pushup"), 4.0);
        assert_eq!(decorator.get_game_base(&base, "pubg"), 4.0);
    }

    #[test]
    fn first_duplicate_wins() {
        let base = sample_base();
        let decorator = OverrideSportDecorator::new(vec![
            definition("pushup", "pubg", 6.0),
            definition("pushup", "pubg", 8.0),
        ]);

        assert_eq!(decorator.get(&base, "pushup", "pubg"), 6.0);
    }

    #[test]
    fn explains_override_instead_of_base() {
        let base = sample_base();
        let decorator = OverrideSportDecorator::new(vec![definition("pushup", "pubg", 6.0)]);

        let terms = decorator.explain(&base, "pushup", "pubg", 5.0);
        assert_eq!(
            terms,
            vec![BreakdownTerm::Override {
                sport: "pushup".to_string(),
                game: "pubg".to_string(),
                amount: 6.0,
            }]
        );
    }
}
