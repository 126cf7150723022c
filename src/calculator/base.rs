use std::collections::HashMap;

use tracing::warn;

use super::{linear_amount, linear_deaths, BreakdownTerm, SportsCalculator};
use crate::models::{Multiplier, RateTable, SportId};

/// Innermost calculator: `sport_base * game_base` from the rate table.
///
/// Sport bases can be replaced by the user through sport-scoped multipliers
/// (`game: None`, `sport: Some(_)`); the game base is always the table's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultSportsCalculator {
    table: RateTable,
    sport_bases: HashMap<SportId, f64>,
}

impl DefaultSportsCalculator {
    pub fn new(table: RateTable) -> Self {
        Self {
            table,
            sport_bases: HashMap::new(),
        }
    }

    /// Respects the user's sport base replacements. First match wins.
    pub fn with_sport_bases(mut self, multipliers: &[Multiplier]) -> Self {
        for multiplier in multipliers.iter().filter(|m| m.is_sport_base()) {
            let Some(sport) = &multiplier.sport else {
                continue;
            };
            if self.sport_bases.contains_key(sport) {
                warn!(sport = %sport, "Ignoring duplicate sport base replacement");
                continue;
            }
            self.sport_bases.insert(sport.clone(), multiplier.value);
        }
        self
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

impl SportsCalculator for DefaultSportsCalculator {
    fn get(&self, sport: &str, game: &str) -> f64 {
        let product = self.get_game_base(game) * self.get_sport_base(sport);
        // five decimals hide float noise such as 0.1 * 3
        (product * 1e5).round() / 1e5
    }

    fn calculate_amount(&self, sport: &str, game: &str, deaths: f64) -> u32 {
        linear_amount(self.get(sport, game), deaths)
    }

    fn calculate_deaths(&self, sport: &str, game: &str, amount: f64) -> u32 {
        linear_deaths(self.get(sport, game), amount)
    }

    fn get_game_base(&self, game: &str) -> f64 {
        self.table.game_base(game)
    }

    fn get_sport_base(&self, sport: &str) -> f64 {
        self.sport_bases
            .get(sport)
            .copied()
            .unwrap_or_else(|| self.table.sport_base(sport))
    }

    fn get_multiplier(&self, _sport: &str, _game: &str) -> Option<Multiplier> {
        None
    }

    fn explain(&self, sport: &str, game: &str, _deaths: f64) -> Vec<BreakdownTerm> {
        vec![BreakdownTerm::Base {
            game_base: self.get_game_base(game),
            sport_base: self.get_sport_base(sport),
            rate: self.get(sport, game),
        }]
    }
}
