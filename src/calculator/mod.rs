pub mod base;
pub mod decorators;
pub mod factory;
pub mod stack;
pub mod updater;

pub use base::DefaultSportsCalculator;
pub use decorators::{
    DeathDecorator, Decorator, ExactlyOneDecorator, MultiplierDecorator, OverrideSportDecorator,
    PlankDecorator,
};
pub use factory::{build_decorator_stack, CalculatorInputs};
pub use stack::{CalculatorStack, CalculatorStackBuilder};
pub use updater::CalculatorUpdater;

use serde::Serialize;

use crate::models::Multiplier;

/// Priority constants for decorator layers.
/// Lower values sit closer to the base calculator. A layer with a higher
/// priority wraps, and can override, every layer below it.
pub mod layer_priority {
    /// Per (sport, game) rate overrides
    pub const OVERRIDE: u32 = 100;
    /// Death count annotation for breakdowns
    pub const DEATHS: u32 = 200;
    /// Global or per-game multipliers
    pub const MULTIPLIER: u32 = 300;
    /// Logarithmic formula for duration sports
    pub const PLANK: u32 = 400;
    /// Freeform mode, always last
    pub const EXACTLY_ONE: u32 = 1000;
}

/// Computes how many exercises a number of deaths is worth.
///
/// Amounts and death counts are rounded only at the boundary; rates stay
/// floating point all the way through the chain.
pub trait SportsCalculator {
    /// Per-death rate for a sport in a game.
    fn get(&self, sport: &str, game: &str) -> f64;

    /// Exercises owed for `deaths`.
    fn calculate_amount(&self, sport: &str, game: &str, deaths: f64) -> u32;

    /// Deaths that would produce `amount` exercises.
    fn calculate_deaths(&self, sport: &str, game: &str, amount: f64) -> u32;

    fn get_game_base(&self, game: &str) -> f64;

    fn get_sport_base(&self, sport: &str) -> f64;

    /// The multiplier currently applied to this pair, if any.
    fn get_multiplier(&self, sport: &str, game: &str) -> Option<Multiplier>;

    /// Terms that make up the amount, innermost first.
    fn explain(&self, sport: &str, game: &str, deaths: f64) -> Vec<BreakdownTerm>;

    fn breakdown(&self, sport: &str, game: &str, deaths: f64) -> Breakdown {
        Breakdown {
            sport: sport.to_string(),
            game: game.to_string(),
            terms: self.explain(sport, game, deaths),
            amount: self.calculate_amount(sport, game, deaths),
        }
    }
}

/// A layer wrapping another calculator.
///
/// Every method defaults to passing through to `inner`, so a decorator only
/// implements the axis it changes. `calculate_amount` and `calculate_deaths`
/// default to the linear formula over the decorator's own `get`.
pub trait CalculatorDecorator {
    fn name(&self) -> &'static str;

    fn priority(&self) -> u32;

    fn get(&self, inner: &dyn SportsCalculator, sport: &str, game: &str) -> f64 {
        inner.get(sport, game)
    }

    fn calculate_amount(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> u32 {
        linear_amount(self.get(inner, sport, game), deaths)
    }

    fn calculate_deaths(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        amount: f64,
    ) -> u32 {
        linear_deaths(self.get(inner, sport, game), amount)
    }

    fn get_game_base(&self, inner: &dyn SportsCalculator, game: &str) -> f64 {
        inner.get_game_base(game)
    }

    fn get_sport_base(&self, inner: &dyn SportsCalculator, sport: &str) -> f64 {
        inner.get_sport_base(sport)
    }

    fn get_multiplier(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
    ) -> Option<Multiplier> {
        inner.get_multiplier(sport, game)
    }

    fn explain(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> Vec<BreakdownTerm> {
        inner.explain(sport, game, deaths)
    }
}

/// One factor of a calculation, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakdownTerm {
    Base {
        game_base: f64,
        sport_base: f64,
        rate: f64,
    },
    Override {
        sport: String,
        game: String,
        amount: f64,
    },
    Deaths {
        count: f64,
    },
    Multiplier {
        value: f64,
    },
    Plank {
        strength_factor: f64,
        max_seconds: f64,
        game_base: f64,
        multiplier: Option<f64>,
        deaths: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub sport: String,
    pub game: String,
    pub terms: Vec<BreakdownTerm>,
    pub amount: u32,
}

/// Clamps garbage input (NaN, infinities, negatives) to zero.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Rounds a non-negative quantity to a count.
pub fn to_count(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

pub fn linear_amount(rate: f64, deaths: f64) -> u32 {
    to_count(rate * sanitize(deaths))
}

/// Inverse of [`linear_amount`]. A zero rate cannot be inverted and yields 0.
pub fn linear_deaths(rate: f64, amount: f64) -> u32 {
    if !rate.is_finite() || rate <= 0.0 {
        return 0;
    }
    to_count(sanitize(amount) / rate)
}
