use std::collections::HashSet;

use tracing::{debug, instrument, warn};

use super::{
    CalculatorStack, DeathDecorator, DefaultSportsCalculator, ExactlyOneDecorator,
    MultiplierDecorator, OverrideSportDecorator, PlankDecorator,
};
use crate::models::{
    GameId, Multiplier, MultiplierMode, OverrideSportDefinition, RateTable, UserPreferences,
    CUSTOM_GAME,
};

/// Everything the calculator depends on. A change to any field means the
/// stack has to be rebuilt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorInputs {
    pub rates: RateTable,
    pub preferences: UserPreferences,
    pub game: GameId,
    pub multiplier_mode: MultiplierMode,
}

impl CalculatorInputs {
    pub fn build(&self) -> CalculatorStack {
        build_decorator_stack(
            &self.rates,
            &self.preferences,
            &self.game,
            &self.multiplier_mode,
        )
    }
}

/// Builds the decorator stack for the current inputs.
///
/// Layers, innermost first: preference-respecting base, overrides, death
/// annotation, multiplier, plank formula, and exactly-one for the custom game.
#[instrument(skip(rates, preferences))]
pub fn build_decorator_stack(
    rates: &RateTable,
    preferences: &UserPreferences,
    game: &str,
    multiplier_mode: &MultiplierMode,
) -> CalculatorStack {
    warn_on_duplicate_overrides(&preferences.game_overrides);
    warn_on_duplicate_multipliers(&preferences.multipliers);

    let base =
        DefaultSportsCalculator::new(rates.clone()).with_sport_bases(&preferences.multipliers);

    let mut builder = CalculatorStack::builder(base)
        .with_layer(OverrideSportDecorator::new(preferences.game_overrides.clone()))
        .with_layer(DeathDecorator::new())
        .with_layer(MultiplierDecorator::new(
            preferences.multipliers.clone(),
            multiplier_mode.clone(),
        ))
        .with_layer(PlankDecorator::new(preferences.plank_seconds()));

    if game == CUSTOM_GAME {
        debug!("Custom game selected, adding exactly-one layer");
        builder = builder.with_layer(ExactlyOneDecorator::new());
    }

    let stack = builder.build();
    debug!(layers = ?stack.layer_names(), "Built calculator stack");
    stack
}

fn warn_on_duplicate_overrides(overrides: &[OverrideSportDefinition]) {
    let mut seen = HashSet::new();
    for entry in overrides {
        if !seen.insert((entry.sport.as_str(), entry.game.as_str())) {
            warn!(
                sport = %entry.sport,
                game = %entry.game,
                "Duplicate override, the first one wins"
            );
        }
    }
}

/// Warns about global or game-scoped multipliers that can never be selected.
/// Returns how many were shadowed.
fn warn_on_duplicate_multipliers(multipliers: &[Multiplier]) -> usize {
    let mut seen = HashSet::new();
    let mut shadowed = 0;
    for entry in multipliers
        .iter()
        .filter(|m| m.is_global() || m.game.is_some())
    {
        if !seen.insert((entry.game.as_deref(), entry.sport.as_deref())) {
            warn!(
                game = ?entry.game,
                sport = ?entry.sport,
                value = entry.value,
                "Duplicate multiplier, the first one wins"
            );
            shadowed += 1;
        }
    }
    shadowed
}
