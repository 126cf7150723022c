use chrono::{DateTime, Utc};

use gotohell::goals::{GoalFrequency, PersonalGoal, SportRecord};

pub fn at(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text)
        .expect("test timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

/// Accumulates sport records for one user with increasing ids
pub struct RecordLog {
    user_id: String,
    records: Vec<SportRecord>,
}

#[allow(dead_code)]
impl RecordLog {
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            records: Vec::new(),
        }
    }

    pub fn with(mut self, kind: &str, amount: u32, timedate: &str) -> Self {
        self.records.push(SportRecord {
            id: self.records.len() as u64 + 1,
            kind: kind.to_string(),
            amount,
            game: "league".to_string(),
            timedate: at(timedate),
            user_id: self.user_id.clone(),
        });
        self
    }

    pub fn goal(&self, sport: &str, amount: u32, frequency: GoalFrequency) -> PersonalGoal {
        PersonalGoal {
            id: format!("{}-{sport}-{frequency}", self.user_id),
            sport: sport.to_string(),
            amount,
            frequency,
            user_id: self.user_id.clone(),
        }
    }

    pub fn records(&self) -> &[SportRecord] {
        &self.records
    }
}
