//! Core data model for the batch driver.

mod enums;
mod outcomes;

pub use enums::RunMode;
pub use outcomes::{JobOutcome, SkipReason};
