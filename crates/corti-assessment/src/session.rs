//! Async driver for one assessment workflow.
//!
//! Single logical actor: the workflow sits behind a [`tokio::sync::Mutex`],
//! and the lock is only ever held for synchronous transitions — never across
//! a network await. Mutual exclusion of the two suspension points comes from
//! the workflow's pending flag, so a concurrent `submit` or second analysis
//! observes [`WorkflowError::OperationInProgress`] instead of queueing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{info, warn};

use corti_core::{Ear, Frequency};

use crate::collaborators::{AnalyzeAudiogram, CollaboratorError, PersistAssessment};
use crate::error::WorkflowError;
use crate::workflow::{AnalysisOutcome, AssessmentWorkflow, ReviewOutcome};

/// Bound on the image-analysis call. The analysis service is external and
/// possibly slow; expiry takes the same path as any other analysis failure.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);

/// One assessment session: the workflow plus its two collaborators.
///
/// Cloning shares the underlying workflow, so a clone can drive the same
/// assessment from another task.
pub struct AssessmentSession<P, A> {
    workflow: Arc<Mutex<AssessmentWorkflow>>,
    persister: P,
    analyzer: A,
    analysis_timeout: Duration,
}

impl<P: Clone, A: Clone> Clone for AssessmentSession<P, A> {
    fn clone(&self) -> Self {
        AssessmentSession {
            workflow: Arc::clone(&self.workflow),
            persister: self.persister.clone(),
            analyzer: self.analyzer.clone(),
            analysis_timeout: self.analysis_timeout,
        }
    }
}

impl<P, A> AssessmentSession<P, A>
where
    P: PersistAssessment,
    A: AnalyzeAudiogram,
{
    pub fn new(persister: P, analyzer: A) -> Self {
        AssessmentSession {
            workflow: Arc::new(Mutex::new(AssessmentWorkflow::new())),
            persister,
            analyzer,
            analysis_timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }

    pub fn with_analysis_timeout(mut self, timeout: Duration) -> Self {
        self.analysis_timeout = timeout;
        self
    }

    /// A point-in-time copy of the workflow, for rendering.
    pub async fn snapshot(&self) -> AssessmentWorkflow {
        self.workflow.lock().await.clone()
    }

    pub async fn set_threshold(
        &self,
        ear: Ear,
        freq: Frequency,
        db: i32,
    ) -> Result<(), WorkflowError> {
        self.workflow.lock().await.set_threshold(ear, freq, db)
    }

    pub async fn set_threshold_hz(&self, ear: Ear, hz: u32, db: i32) -> Result<(), WorkflowError> {
        self.workflow.lock().await.set_threshold_hz(ear, hz, db)
    }

    /// Compute the diagnosis and persist the assessment, best-effort.
    ///
    /// The returned outcome always carries the locally computed diagnosis;
    /// a persistence failure only empties the recommendations and attaches
    /// the `HistoryNotSaved` notice. `Err` is reserved for local faults
    /// (wrong phase, a call already in progress).
    pub async fn submit(&self, notes: &str) -> Result<ReviewOutcome, WorkflowError> {
        let (id, ticket) = {
            let mut workflow = self.workflow.lock().await;
            (workflow.id(), workflow.begin_save(notes)?)
        };

        info!(
            assessment = %id,
            diagnosis = %ticket.submission.diagnosis,
            "submitting assessment"
        );

        let result = self.persister.persist(ticket.submission.clone()).await;
        if let Err(err) = &result {
            warn!(assessment = %id, error = %err, "assessment persistence failed; keeping local diagnosis");
        }

        self.workflow
            .lock()
            .await
            .complete_save(ticket, result)
            .ok_or(WorkflowError::Abandoned)
    }

    /// Run the uploaded image through the analysis collaborator and merge
    /// whatever readings it produced.
    ///
    /// Failures and timeouts are absorbed: the outcome's notice asks the
    /// user to enter values manually, and the stored thresholds are exactly
    /// as they were. `Err` is reserved for local faults.
    pub async fn analyze(
        &self,
        image: Vec<u8>,
        filename: &str,
    ) -> Result<AnalysisOutcome, WorkflowError> {
        let (id, ticket) = {
            let mut workflow = self.workflow.lock().await;
            (workflow.id(), workflow.begin_analysis()?)
        };

        info!(assessment = %id, filename, bytes = image.len(), "analyzing audiogram image");

        let result = match tokio::time::timeout(
            self.analysis_timeout,
            self.analyzer.analyze(image, filename.to_string()),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(CollaboratorError(format!(
                "image analysis timed out after {:?}",
                self.analysis_timeout
            ))),
        };
        if let Err(err) = &result {
            warn!(assessment = %id, error = %err, "image analysis failed; thresholds unchanged");
        }

        Ok(self.workflow.lock().await.complete_analysis(ticket, result))
    }

    /// "Start Over" from the review screen.
    pub async fn restart(&self) -> Result<(), WorkflowError> {
        self.workflow.lock().await.restart()
    }

    /// Discard the session's state entirely, abandoning any in-flight call.
    pub async fn reset(&self) {
        self.workflow.lock().await.reset();
    }
}
