use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::models::{GameId, SportId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GoalFrequency {
    Daily,
    Weekly,
    Monthly,
}

/// A target number of exercises of one sport per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalGoal {
    pub id: String,
    pub sport: SportId,
    pub amount: u32,
    pub frequency: GoalFrequency,
    pub user_id: String,
}

/// Exercises a user has logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportRecord {
    pub id: u64,
    pub kind: SportId,
    pub amount: u32,
    pub game: GameId,
    pub timedate: DateTime<Utc>,
    pub user_id: String,
}
