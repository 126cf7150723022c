use std::collections::HashMap;

use gotohell::{Multiplier, OverrideSportDefinition, RateTable, UserPreferences};

/// sports: push-up 4, leg-raises 5, plank 1; games: overwatch 2, league 3, pubg 4
pub fn sample_rates() -> RateTable {
    RateTable::new(
        HashMap::from([
            ("push-up".to_string(), 4.0),
            ("leg-raises".to_string(), 5.0),
            ("plank".to_string(), 1.0),
        ]),
        HashMap::from([
            ("overwatch".to_string(), 2.0),
            ("league".to_string(), 3.0),
            ("pubg".to_string(), 4.0),
        ]),
    )
}

/// Builder for user preferences in tests
pub struct PreferencesBuilder {
    preferences: UserPreferences,
}

#[allow(dead_code)]
impl PreferencesBuilder {
    pub fn new() -> Self {
        Self {
            preferences: UserPreferences::default(),
        }
    }

    /// Overrides pubg push-up 6 and pubg leg-raises 2, overwatch multiplier 2
    pub fn with_sample_setup(self) -> Self {
        self.with_override("push-up", "pubg", 6.0)
            .with_override("leg-raises", "pubg", 2.0)
            .with_multiplier(Multiplier::for_game("overwatch", 2.0))
    }

    pub fn with_override(mut self, sport: &str, game: &str, amount: f64) -> Self {
        self.preferences
            .game_overrides
            .push(OverrideSportDefinition {
                sport: sport.to_string(),
                game: game.to_string(),
                amount,
            });
        self
    }

    pub fn with_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.preferences.multipliers.push(multiplier);
        self
    }

    pub fn with_plank_seconds(mut self, seconds: f64) -> Self {
        self.preferences.sport_specific.plank.seconds = seconds;
        self
    }

    pub fn build(self) -> UserPreferences {
        self.preferences
    }
}

impl Default for PreferencesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
