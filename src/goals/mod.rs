pub mod calculator;
pub mod models;

pub use calculator::{DefaultPersonalGoalCalculator, PersonalGoalCalculator};
pub use models::{GoalFrequency, PersonalGoal, SportRecord};
