mod deaths;
mod exactly_one;
mod multiplier;
mod override_sport;
mod plank;

pub use deaths::DeathDecorator;
pub use exactly_one::ExactlyOneDecorator;
pub use multiplier::MultiplierDecorator;
pub use override_sport::OverrideSportDecorator;
pub use plank::PlankDecorator;

use serde::Serialize;

use super::{BreakdownTerm, CalculatorDecorator, SportsCalculator};
use crate::models::Multiplier;

/// Every known decorator kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decorator {
    Override(OverrideSportDecorator),
    Deaths(DeathDecorator),
    Multiplier(MultiplierDecorator),
    Plank(PlankDecorator),
    ExactlyOne(ExactlyOneDecorator),
}

impl Decorator {
    fn as_layer(&self) -> &dyn CalculatorDecorator {
        match self {
            Decorator::Override(d) => d,
            Decorator::Deaths(d) => d,
            Decorator::Multiplier(d) => d,
            Decorator::Plank(d) => d,
            Decorator::ExactlyOne(d) => d,
        }
    }
}

impl CalculatorDecorator for Decorator {
    fn name(&self) -> &'static str {
        self.as_layer().name()
    }

    fn priority(&self) -> u32 {
        self.as_layer().priority()
    }

    fn get(&self, inner: &dyn SportsCalculator, sport: &str, game: &str) -> f64 {
        self.as_layer().get(inner, sport, game)
    }

    fn calculate_amount(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> u32 {
        self.as_layer().calculate_amount(inner, sport, game, deaths)
    }

    fn calculate_deaths(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        amount: f64,
    ) -> u32 {
        self.as_layer().calculate_deaths(inner, sport, game, amount)
    }

    fn get_game_base(&self, inner: &dyn SportsCalculator, game: &str) -> f64 {
        self.as_layer().get_game_base(inner, game)
    }

    fn get_sport_base(&self, inner: &dyn SportsCalculator, sport: &str) -> f64 {
        self.as_layer().get_sport_base(inner, sport)
    }

    fn get_multiplier(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
    ) -> Option<Multiplier> {
        self.as_layer().get_multiplier(inner, sport, game)
    }

    fn explain(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> Vec<BreakdownTerm> {
        self.as_layer().explain(inner, sport, game, deaths)
    }
}

impl From<OverrideSportDecorator> for Decorator {
    fn from(d: OverrideSportDecorator) -> Self {
        Decorator::Override(d)
    }
}

impl From<DeathDecorator> for Decorator {
    fn from(d: DeathDecorator) -> Self {
        Decorator::Deaths(d)
    }
}

impl From<MultiplierDecorator> for Decorator {
    fn from(d: MultiplierDecorator) -> Self {
        Decorator::Multiplier(d)
    }
}

impl From<PlankDecorator> for Decorator {
    fn from(d: PlankDecorator) -> Self {
        Decorator::Plank(d)
    }
}

impl From<ExactlyOneDecorator> for Decorator {
    fn from(d: ExactlyOneDecorator) -> Self {
        Decorator::ExactlyOne(d)
    }
}
