pub mod builders;
pub mod records;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{sample_rates, PreferencesBuilder};
#[allow(unused_imports)]
pub use records::{at, RecordLog};
