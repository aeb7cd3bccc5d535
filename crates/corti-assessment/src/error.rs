use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use corti_core::CoreError;

/// Local workflow faults. Collaborator failures never appear here — they are
/// absorbed into advisory [`Notice`]s at the workflow boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// A persistence or analysis call is already outstanding.
    #[error("an assessment call is already in progress")]
    OperationInProgress,

    /// The operation requires the collecting phase.
    #[error("assessment is no longer collecting thresholds")]
    NotCollecting,

    /// The operation requires the reviewed phase.
    #[error("assessment has not been reviewed yet")]
    NotReviewed,

    /// The assessment was reset while a call was in flight; its result was
    /// discarded.
    #[error("assessment was reset while a call was in flight")]
    Abandoned,

    #[error(transparent)]
    Threshold(#[from] CoreError),
}

/// A non-blocking, dismissible message for the user. Both cases are the
/// recovered form of a collaborator failure: the workflow carries on and the
/// notice says what was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The diagnosis was computed but could not be saved to history.
    HistoryNotSaved,
    /// Image analysis failed or timed out; thresholds were left untouched.
    AnalysisUnavailable,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::HistoryNotSaved => {
                write!(f, "Connection issue saving to history; showing your results locally.")
            }
            Notice::AnalysisUnavailable => {
                write!(f, "AI analysis unavailable. Please enter values manually.")
            }
        }
    }
}
