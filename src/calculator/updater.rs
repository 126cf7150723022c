use tracing::debug;

use super::{CalculatorInputs, CalculatorStack};
use crate::models::{MultiplierMode, RateTable, UserPreferences};

/// Holds the current stack and rebuilds it when one of its inputs changes.
///
/// Setting an input to the value it already has keeps the existing stack.
#[derive(Debug, Clone, Default)]
pub struct CalculatorUpdater {
    inputs: CalculatorInputs,
    stack: CalculatorStack,
    rebuilds: u64,
}

impl CalculatorUpdater {
    pub fn new(inputs: CalculatorInputs) -> Self {
        let stack = inputs.build();
        Self {
            inputs,
            stack,
            rebuilds: 1,
        }
    }

    pub fn calculator(&self) -> &CalculatorStack {
        &self.stack
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    /// How many times a stack has been built.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn set_rates(&mut self, rates: RateTable) -> bool {
        if self.inputs.rates == rates {
            return false;
        }
        self.inputs.rates = rates;
        self.rebuild("rates")
    }

    pub fn set_preferences(&mut self, preferences: UserPreferences) -> bool {
        if self.inputs.preferences == preferences {
            return false;
        }
        self.inputs.preferences = preferences;
        self.rebuild("preferences")
    }

    pub fn set_game(&mut self, game: &str) -> bool {
        if self.inputs.game == game {
            return false;
        }
        self.inputs.game = game.to_string();
        self.rebuild("game")
    }

    pub fn set_multiplier_mode(&mut self, mode: MultiplierMode) -> bool {
        if self.inputs.multiplier_mode == mode {
            return false;
        }
        self.inputs.multiplier_mode = mode;
        self.rebuild("multiplier_mode")
    }

    fn rebuild(&mut self, changed: &'static str) -> bool {
        debug!(changed, "Calculator input changed, rebuilding stack");
        self.stack = self.inputs.build();
        self.rebuilds += 1;
        true
    }
}
