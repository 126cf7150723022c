use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::models::{GameId, MultiplierMode, RateTable, SportId, UserPreferences};
use crate::shared::AppError;

const DEFAULT_GAME: &str = "league";
const DEFAULT_SPORT: &str = "pushup";

/// Runtime configuration read from `GOTOHELL_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub rates_path: Option<PathBuf>,
    pub preferences_path: Option<PathBuf>,
    pub game: GameId,
    pub sport: SportId,
    pub multiplier_mode: MultiplierMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rates_path: None,
            preferences_path: None,
            game: DEFAULT_GAME.to_string(),
            sport: DEFAULT_SPORT.to_string(),
            multiplier_mode: MultiplierMode::Automatic,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for missing or empty values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let multiplier_mode = match get("GOTOHELL_MULTIPLIER_MODE") {
            Some(mode) => MultiplierMode::try_from(mode.trim())?,
            None => defaults.multiplier_mode,
        };

        Ok(Self {
            rates_path: get("GOTOHELL_RATES").map(PathBuf::from),
            preferences_path: get("GOTOHELL_PREFERENCES").map(PathBuf::from),
            game: get("GOTOHELL_GAME").unwrap_or(defaults.game),
            sport: get("GOTOHELL_SPORT").unwrap_or(defaults.sport),
            multiplier_mode,
        })
    }

    /// Rate table from `rates_path`, or the empty fallback table.
    #[instrument(skip(self))]
    pub fn load_rates(&self) -> Result<RateTable, AppError> {
        match &self.rates_path {
            Some(path) => {
                info!(path = %path.display(), "Loading rate table");
                RateTable::from_json(&std::fs::read_to_string(path)?)
            }
            None => {
                debug!("No rate table configured, using empty table");
                Ok(RateTable::default())
            }
        }
    }

    #[instrument(skip(self))]
    pub fn load_preferences(&self) -> Result<UserPreferences, AppError> {
        match &self.preferences_path {
            Some(path) => {
                info!(path = %path.display(), "Loading user preferences");
                UserPreferences::from_json(&std::fs::read_to_string(path)?)
            }
            None => {
                debug!("No preferences configured, using defaults");
                Ok(UserPreferences::default())
            }
        }
    }
}
