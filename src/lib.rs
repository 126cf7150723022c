// Exercise amount engine for GoToHell
// This file exposes the public API for the binary and integration tests

pub mod calculator;
pub mod config;
pub mod goals;
pub mod models;
pub mod rating;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use calculator::{
    build_decorator_stack, Breakdown, BreakdownTerm, CalculatorInputs, CalculatorStack,
    CalculatorUpdater, SportsCalculator,
};
pub use config::AppConfig;
pub use goals::{DefaultPersonalGoalCalculator, PersonalGoalCalculator};
pub use models::{
    Multiplier, MultiplierMode, OverrideSportDefinition, RateTable, UserPreferences,
};
pub use rating::{Rating0To3, RatingCalculator};
pub use shared::AppError;
