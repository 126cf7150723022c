use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::shared::AppError;

pub type SportId = String;
pub type GameId = String;

/// Sport whose amount is a duration and follows the logarithmic formula.
pub const PLANK: &str = "plank";

/// Pseudo-game where the user types the exercise count directly.
pub const CUSTOM_GAME: &str = "custom";

pub const DEFAULT_PLANK_SECONDS: f64 = 180.0;
pub const DEFAULT_MAX_DEATHS: u32 = 10;

/// Base multipliers per sport and per game, as served by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub sports: HashMap<SportId, f64>,
    #[serde(default)]
    pub games: HashMap<GameId, f64>,
}

impl RateTable {
    pub fn new(sports: HashMap<SportId, f64>, games: HashMap<GameId, f64>) -> Self {
        Self { sports, games }
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn sport_base(&self, sport: &str) -> f64 {
        self.sports.get(sport).copied().unwrap_or_default()
    }

    pub fn game_base(&self, game: &str) -> f64 {
        self.games.get(game).copied().unwrap_or_default()
    }
}

/// A user-defined rate for one exact (sport, game) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideSportDefinition {
    pub sport: SportId,
    pub game: GameId,
    pub amount: f64,
}

/// A user-configured scaling factor.
///
/// `game: None` applies across all games. An entry with `game: None` and a
/// sport set replaces that sport's base rate instead of scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multiplier {
    pub game: Option<GameId>,
    pub sport: Option<SportId>,
    #[serde(rename = "multiplier")]
    pub value: f64,
}

impl Multiplier {
    pub fn global(value: f64) -> Self {
        Self {
            game: None,
            sport: None,
            value,
        }
    }

    pub fn for_game(game: impl Into<GameId>, value: f64) -> Self {
        Self {
            game: Some(game.into()),
            sport: None,
            value,
        }
    }

    pub fn for_sport(sport: impl Into<SportId>, value: f64) -> Self {
        Self {
            game: None,
            sport: Some(sport.into()),
            value,
        }
    }

    pub fn is_global(&self) -> bool {
        self.game.is_none() && self.sport.is_none()
    }

    pub fn is_sport_base(&self) -> bool {
        self.game.is_none() && self.sport.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlankSettings {
    /// Seconds of plank owed for the calibration death count.
    #[serde(
        default = "default_plank_seconds",
        deserialize_with = "seconds_or_default"
    )]
    pub seconds: f64,
}

impl Default for PlankSettings {
    fn default() -> Self {
        Self {
            seconds: DEFAULT_PLANK_SECONDS,
        }
    }
}

fn default_plank_seconds() -> f64 {
    DEFAULT_PLANK_SECONDS
}

// the backend sends null for an unset duration
fn seconds_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_PLANK_SECONDS))
}

fn default_max_deaths() -> u32 {
    DEFAULT_MAX_DEATHS
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SportSpecificSettings {
    #[serde(default)]
    pub plank: PlankSettings,
}

/// The subset of the user's stored preferences the calculator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub game_overrides: Vec<OverrideSportDefinition>,
    #[serde(default)]
    pub multipliers: Vec<Multiplier>,
    #[serde(default)]
    pub sport_specific: SportSpecificSettings,
    #[serde(default = "default_max_deaths")]
    pub max_deaths: u32,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            game_overrides: Vec::new(),
            multipliers: Vec::new(),
            sport_specific: SportSpecificSettings::default(),
            max_deaths: DEFAULT_MAX_DEATHS,
        }
    }
}

impl UserPreferences {
    /// Parses and validates preferences as stored by the backend.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let preferences: Self = serde_json::from_str(text)?;
        preferences.validate()?;
        Ok(preferences)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let seconds = self.sport_specific.plank.seconds;
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(AppError::Validation(format!(
                "plank seconds must be positive, got {seconds}"
            )));
        }

        if let Some(m) = self
            .multipliers
            .iter()
            .find(|m| !m.value.is_finite() || m.value < 0.0)
        {
            return Err(AppError::Validation(format!(
                "multiplier must be a non-negative number, got {}",
                m.value
            )));
        }

        if let Some(o) = self
            .game_overrides
            .iter()
            .find(|o| !o.amount.is_finite() || o.amount < 0.0)
        {
            return Err(AppError::Validation(format!(
                "override for {}/{} must be a non-negative number, got {}",
                o.sport, o.game, o.amount
            )));
        }

        Ok(())
    }

    pub fn plank_seconds(&self) -> f64 {
        self.sport_specific.plank.seconds
    }
}

/// Which multiplier the user currently wants applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierMode {
    /// Only global multipliers.
    Global,
    /// The current game's multiplier, falling back to the global one.
    #[default]
    Automatic,
    /// Multipliers scoped to the given game.
    Game(GameId),
}

impl fmt::Display for MultiplierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiplierMode::Global => write!(f, "global"),
            MultiplierMode::Automatic => write!(f, "auto"),
            MultiplierMode::Game(game) => write!(f, "game:{game}"),
        }
    }
}

impl TryFrom<&str> for MultiplierMode {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "global" => Ok(MultiplierMode::Global),
            "auto" | "automatic" => Ok(MultiplierMode::Automatic),
            _ => match s.strip_prefix("game:") {
                Some(game) if !game.is_empty() => Ok(MultiplierMode::Game(game.to_string())),
                _ => Err(AppError::Config(format!("unknown multiplier mode '{s}'"))),
            },
        }
    }
}
