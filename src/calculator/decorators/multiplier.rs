use serde::Serialize;

use super::super::{layer_priority, BreakdownTerm, CalculatorDecorator, SportsCalculator};
use crate::models::{Multiplier, MultiplierMode};

/// Scales the wrapped rate by the user's global or per-game multiplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiplierDecorator {
    multipliers: Vec<Multiplier>,
    mode: MultiplierMode,
}

impl MultiplierDecorator {
    pub fn new(multipliers: Vec<Multiplier>, mode: MultiplierMode) -> Self {
        Self { multipliers, mode }
    }

    pub fn mode(&self) -> &MultiplierMode {
        &self.mode
    }

    fn first_global(&self) -> Option<&Multiplier> {
        self.multipliers.iter().find(|m| m.is_global())
    }

    fn first_for_game(&self, game: &str) -> Option<&Multiplier> {
        self.multipliers
            .iter()
            .find(|m| m.game.as_deref() == Some(game))
    }

    /// Picks the multiplier for the current mode.
    ///
    /// A multiplier of exactly 1 is reported as no multiplier at all.
    pub fn select(&self, game: &str) -> Option<&Multiplier> {
        let selected = match &self.mode {
            MultiplierMode::Global => self.first_global(),
            MultiplierMode::Automatic => self
                .first_for_game(game)
                .or_else(|| self.first_global()),
            MultiplierMode::Game(scope) => self.first_for_game(scope),
        };

        selected.filter(|m| m.value != 1.0)
    }
}

impl CalculatorDecorator for MultiplierDecorator {
    fn name(&self) -> &'static str {
        "MultiplierDecorator"
    }

    fn priority(&self) -> u32 {
        layer_priority::MULTIPLIER
    }

    fn get(&self, inner: &dyn SportsCalculator, sport: &str, game: &str) -> f64 {
        let rate = inner.get(sport, game);
        match self.select(game) {
            Some(multiplier) => rate * multiplier.value,
            None => rate,
        }
    }

    fn get_multiplier(
        &self,
        _inner: &dyn SportsCalculator,
        _sport: &str,
        game: &str,
    ) -> Option<Multiplier> {
        self.select(game).cloned()
    }

    fn explain(
        &self,
        inner: &dyn SportsCalculator,
        sport: &str,
        game: &str,
        deaths: f64,
    ) -> Vec<BreakdownTerm> {
        let mut terms = inner.explain(sport, game, deaths);
        if let Some(multiplier) = self.select(game) {
            terms.push(BreakdownTerm::Multiplier {
                value: multiplier.value,
            });
        }
        terms
    }
}
