//! corti-core
//!
//! Pure domain types for the hearing portal: audiometric frequencies,
//! per-ear threshold sets, the pure-tone-average diagnosis classifier, and
//! the backend-facing models. No network or async dependency — this is the
//! shared vocabulary of the corti system.

pub mod diagnosis;
pub mod error;
pub mod frequency;
pub mod models;
pub mod thresholds;

pub use diagnosis::{Diagnosis, classify};
pub use error::CoreError;
pub use frequency::{Ear, Frequency};
pub use thresholds::{PartialThresholds, ThresholdPair, ThresholdSet};
