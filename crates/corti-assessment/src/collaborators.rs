//! Seams to the external backend, modeled as opaque async operations.
//!
//! Methods return boxed futures for dyn compatibility. The workflow never
//! inspects a collaborator failure beyond logging it — every failure takes
//! the same non-fatal path — so the error type is a plain message.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use corti_core::models::Recommendation;
use corti_core::{Diagnosis, PartialThresholds, ThresholdPair};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Opaque failure of an external call (network error, non-2xx, timeout).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct CollaboratorError(pub String);

/// The payload persisted when an assessment is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub thresholds: ThresholdPair,
    pub diagnosis: Diagnosis,
    pub notes: String,
}

/// What a successful persistence call returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedAssessment {
    /// Backend identifier of the stored audiogram, when echoed.
    #[serde(default)]
    pub id: Option<String>,
    /// May contain entries with dangling device references; the workflow
    /// filters those out before exposing them.
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// Per-ear sparse threshold readings extracted from an audiogram image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedThresholds {
    #[serde(default)]
    pub right: PartialThresholds,
    #[serde(default)]
    pub left: PartialThresholds,
}

/// Stores a submitted assessment in the patient's history and returns any
/// device recommendations the backend matched against the diagnosis.
pub trait PersistAssessment: Send + Sync {
    fn persist(
        &self,
        submission: AssessmentSubmission,
    ) -> BoxFuture<'_, Result<SavedAssessment, CollaboratorError>>;
}

/// Reads threshold values off an uploaded audiogram image.
pub trait AnalyzeAudiogram: Send + Sync {
    fn analyze(
        &self,
        image: Vec<u8>,
        filename: String,
    ) -> BoxFuture<'_, Result<AnalyzedThresholds, CollaboratorError>>;
}
