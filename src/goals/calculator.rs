use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Utc};

use super::models::{GoalFrequency, PersonalGoal, SportRecord};

/// Progress of personal goals over logged exercises.
///
/// All periods are UTC and `now` is always passed in.
pub trait PersonalGoalCalculator {
    /// Exercises counted towards `goal` in its current period, the half-open
    /// window `[earliest_valid_time, last_possible_time)`.
    fn exercises_done(
        &self,
        goal: &PersonalGoal,
        records: &[SportRecord],
        now: DateTime<Utc>,
    ) -> u32;

    /// End of the goal's current period.
    fn last_possible_time(&self, goal: &PersonalGoal, now: DateTime<Utc>) -> DateTime<Utc>;

    /// Fraction of the goal reached; 1.0 is done and it may exceed that.
    fn percentage_done(
        &self,
        goal: &PersonalGoal,
        records: &[SportRecord],
        now: DateTime<Utc>,
    ) -> f64 {
        self.exercises_done(goal, records, now) as f64 / goal.amount as f64
    }

    /// Mean of [`Self::percentage_done`] over all goals, 0 without goals.
    fn percentage_done_all(
        &self,
        goals: &[PersonalGoal],
        records: &[SportRecord],
        now: DateTime<Utc>,
    ) -> f64 {
        if goals.is_empty() {
            return 0.0;
        }
        goals
            .iter()
            .map(|goal| self.percentage_done(goal, records, now) / goals.len() as f64)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPersonalGoalCalculator;

impl DefaultPersonalGoalCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Start of the goal's current period.
    pub fn earliest_valid_time(&self, goal: &PersonalGoal, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let start = match goal.frequency {
            GoalFrequency::Daily => today,
            GoalFrequency::Weekly => {
                today - Duration::days(today.weekday().num_days_from_monday() as i64)
            }
            GoalFrequency::Monthly => first_of_month(today),
        };
        midnight(start)
    }
}

impl PersonalGoalCalculator for DefaultPersonalGoalCalculator {
    fn exercises_done(
        &self,
        goal: &PersonalGoal,
        records: &[SportRecord],
        now: DateTime<Utc>,
    ) -> u32 {
        let earliest = self.earliest_valid_time(goal, now);
        let end = self.last_possible_time(goal, now);
        records
            .iter()
            .filter(|record| {
                record.user_id == goal.user_id
                    && record.kind == goal.sport
                    && record.timedate >= earliest
                    && record.timedate < end
            })
            .map(|record| record.amount)
            .sum()
    }

    fn last_possible_time(&self, goal: &PersonalGoal, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let end = match goal.frequency {
            GoalFrequency::Daily => today + Duration::days(1),
            GoalFrequency::Weekly => {
                today + Duration::days(7 - today.weekday().num_days_from_monday() as i64)
            }
            GoalFrequency::Monthly => {
                let first = first_of_month(today);
                first.checked_add_months(Months::new(1)).unwrap_or(first)
            }
        };
        midnight(end)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(text: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc)
    }

    fn goal(frequency: GoalFrequency) -> PersonalGoal {
        PersonalGoal {
            id: "goal".into(),
            sport: "pushup".into(),
            amount: 20,
            frequency,
            user_id: "user1".into(),
        }
    }

    #[rstest]
    #[case(GoalFrequency::Daily, "2024-01-03T15:30:00Z", "2024-01-03T00:00:00Z")]
    #[case(GoalFrequency::Weekly, "2024-01-03T15:30:00Z", "2024-01-01T00:00:00Z")]
    #[case(GoalFrequency::Weekly, "2024-01-07T23:59:59Z", "2024-01-01T00:00:00Z")]
    #[case(GoalFrequency::Weekly, "2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z")]
    #[case(GoalFrequency::Monthly, "2024-02-29T12:00:00Z", "2024-02-01T00:00:00Z")]
    fn earliest_valid_time_starts_the_period(
        #[case] frequency: GoalFrequency,
        #[case] now: &str,
        #[case] expected: &str,
    ) {
        let calculator = DefaultPersonalGoalCalculator::new();
        assert_eq!(
            calculator.earliest_valid_time(&goal(frequency), at(now)),
            at(expected)
        );
    }

    #[rstest]
    #[case(GoalFrequency::Daily, "2024-01-01T15:30:00Z", "2024-01-02T00:00:00Z")]
    #[case(GoalFrequency::Weekly, "2024-01-03T15:30:00Z", "2024-01-08T00:00:00Z")]
    #[case(GoalFrequency::Weekly, "2024-01-07T15:30:00Z", "2024-01-08T00:00:00Z")]
    #[case(GoalFrequency::Weekly, "2024-01-08T09:00:00Z", "2024-01-15T00:00:00Z")]
    #[case(GoalFrequency::Monthly, "2024-01-15T15:30:00Z", "2024-02-01T00:00:00Z")]
    #[case(GoalFrequency::Monthly, "2024-12-15T15:30:00Z", "2025-01-01T00:00:00Z")]
    #[case(GoalFrequency::Monthly, "2024-02-15T15:30:00Z", "2024-03-01T00:00:00Z")]
    fn last_possible_time_ends_the_period(
        #[case] frequency: GoalFrequency,
        #[case] now: &str,
        #[case] expected: &str,
    ) {
        let calculator = DefaultPersonalGoalCalculator::new();
        assert_eq!(
            calculator.last_possible_time(&goal(frequency), at(now)),
            at(expected)
        );
    }

    #[test]
    fn zero_amount_goal_is_infinitely_done() {
        let calculator = DefaultPersonalGoalCalculator::new();
        let mut goal = goal(GoalFrequency::Daily);
        goal.amount = 0;
        let records = vec![SportRecord {
            id: 1,
            kind: "pushup".into(),
            amount: 5,
            game: "league".into(),
            timedate: at("2024-01-01T10:00:00Z"),
            user_id: "user1".into(),
        }];

        let percentage = calculator.percentage_done(&goal, &records, at("2024-01-01T12:00:00Z"));
        assert!(percentage.is_infinite());
    }

    #[test]
    fn no_goals_is_zero_percent() {
        let calculator = DefaultPersonalGoalCalculator::new();
        assert_eq!(
            calculator.percentage_done_all(&[], &[], at("2024-01-01T12:00:00Z")),
            0.0
        );
    }
}
