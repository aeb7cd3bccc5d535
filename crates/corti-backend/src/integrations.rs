//! Wiring the portal client into the assessment workflow's collaborator
//! seams.

use corti_assessment::{
    AnalyzeAudiogram, AnalyzedThresholds, AssessmentSubmission, BoxFuture, CollaboratorError,
    PersistAssessment, SavedAssessment,
};

use crate::client::PortalClient;

impl PersistAssessment for PortalClient {
    fn persist(
        &self,
        submission: AssessmentSubmission,
    ) -> BoxFuture<'_, Result<SavedAssessment, CollaboratorError>> {
        Box::pin(async move {
            let created = self
                .create_audiogram(
                    &submission.thresholds,
                    submission.diagnosis,
                    &submission.notes,
                )
                .await
                .map_err(|e| CollaboratorError(e.to_string()))?;
            Ok(SavedAssessment {
                id: Some(created.id),
                recommendations: created.recommendations,
            })
        })
    }
}

impl AnalyzeAudiogram for PortalClient {
    fn analyze(
        &self,
        image: Vec<u8>,
        filename: String,
    ) -> BoxFuture<'_, Result<AnalyzedThresholds, CollaboratorError>> {
        Box::pin(async move {
            self.analyze_audiogram(image, filename)
                .await
                .map_err(|e| CollaboratorError(e.to_string()))
        })
    }
}
