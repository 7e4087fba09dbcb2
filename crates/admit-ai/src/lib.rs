//! Admissions evaluation engine.
//!
//! Turns an applicant profile plus a read-only school catalog into component scores, a
//! calibrated admission probability, a decision label and explanatory narrative.

pub mod admissions;
pub mod config;
pub mod error;
pub mod telemetry;
