use serde::Serialize;

use super::super::{
    layer_priority, sanitize, to_count, BreakdownTerm, CalculatorDecorator, SportsCalculator,
};
use crate::models::{DEFAULT_PLANK_SECONDS, PLANK};

const LOG_BASE: f64 = 1.75;

/// Death count at which a game base and multiplier of 1 owe `max_seconds`.
pub const CALIBRATION_DEATHS: f64 = 10.0;

fn log_base(x: f64) -> f64 {
    x.ln() / LOG_BASE.ln()
}

/// Logarithmic formula for planks: the seconds owed saturate as deaths
/// grow instead of rising linearly.
///
/// ```text
/// amount = strength * log_1.75(1 + deaths * multiplier * game_base)
/// strength = max_seconds / log_1.75(1 + CALIBRATION_DEATHS)
/// ```
///
/// Every other sport passes through to the wrapped calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlankDecorator {
    max_seconds: f64,
}

impl Default for PlankDecorator {
    fn default() -> Self {
        Self::new(DEFAULT_PLANK_SECONDS)
    }
}

impl PlankDecorator {
    pub fn new(max_seconds: f64) -> Self {
        Self {
            max_seconds: sanitize(max_seconds),
        }
    }

    pub fn max_seconds(&self) -> f64 {
        self.max_seconds
    }

    pub fn strength_factor(&self) -> f64 {
        self.max_seconds / log_base(1.0 + CALIBRATION_DEATHS)
    }

    /// Game base and multiplier as seen through the wrapped chain.
    fn scale(&self, inner: &dyn SportsCalculator, sport: &str, game: &str) -> (f64, Option<f64>) {
        let game_base = sanitize(inner.get_game_base(game));
        let multiplier = inner
            .get_multiplier(sport, game)
            .map(|m| sanitize(m.value));
        (game_base, multiplier)
    }

    fn seconds(&self, deaths: f64, game_base: f64, multiplier: f64) -> f64 {
        self.strength_factor() * log_base(1.0 + deaths * multiplier * game_base)
    }

    fn deaths_for(&self, seconds: f64, game_base: f64, multiplier: f64) -> f64 {
        let strength = self.strength_factor();
        let scale = multiplier * game_base;
        if strength <= 0.0 || scale <= 0.0 {
            return 0.0;
        }
        (LOG_BASE.powf(seconds / strength) - 1.0) / scale
    }
}

impl CalculatorDecorator for PlankDecorator {
    fn name(&self) -> &'static str {
        "PlankDecorator"
    }

    fn priority(&self) -> u32 {
        layer_priority::PLANK
    }

    fn calculate_amount(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> u32 {
        let deaths = sanitize(deaths);
        if sport != PLANK {
            return inner.calculate_amount(sport, game, deaths);
        }

        let (game_base, multiplier) = self.scale(inner, sport, game);
        to_count(self.seconds(deaths, game_base, multiplier.unwrap_or(1.0)))
    }

    fn calculate_deaths(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        amount: f64,
    ) -> u32 {
        let amount = sanitize(amount);
        if sport != PLANK {
            return inner.calculate_deaths(sport, game, amount);
        }

        let (game_base, multiplier) = self.scale(inner, sport, game);
        to_count(self.deaths_for(amount, game_base, multiplier.unwrap_or(1.0)))
    }

    fn explain(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> Vec<BreakdownTerm> {
        if sport != PLANK {
            return inner.explain(sport, game, deaths);
        }

        let (game_base, multiplier) = self.scale(inner, sport, game);
        vec![BreakdownTerm::Plank {
            strength_factor: self.strength_factor(),
            max_seconds: self.max_seconds,
            game_base,
            multiplier,
            deaths: sanitize(deaths),
        }]
    }
}
