//! corti-assessment
//!
//! The hearing-assessment workflow: a two-phase state machine over a pair of
//! threshold sets, with best-effort persistence and optional AI threshold
//! ingestion. The machine itself ([`workflow::AssessmentWorkflow`]) is a pure
//! value object; [`session::AssessmentSession`] drives it across the two
//! async suspension points (persist, analyze) without ever holding its lock
//! over a network await.

pub mod collaborators;
pub mod error;
pub mod session;
pub mod workflow;

pub use collaborators::{
    AnalyzeAudiogram, AnalyzedThresholds, AssessmentSubmission, BoxFuture, CollaboratorError,
    PersistAssessment, SavedAssessment,
};
pub use error::{Notice, WorkflowError};
pub use session::AssessmentSession;
pub use workflow::{AnalysisOutcome, AssessmentWorkflow, Phase, ReviewOutcome};
