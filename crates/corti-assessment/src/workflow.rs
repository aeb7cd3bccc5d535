//! The assessment state machine, independent of any async runtime.
//!
//! All mutation goes through explicit transition methods. The two async
//! operations are split into begin/complete pairs: `begin_*` validates,
//! marks the call pending and hands back a ticket; `complete_*` consumes the
//! ticket together with the call's result. Tickets carry the generation they
//! were issued in, so a completion that arrives after [`AssessmentWorkflow::reset`]
//! is recognized as stale and discarded instead of clobbering fresh state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use corti_core::models::{Recommendation, recommendation};
use corti_core::{Diagnosis, Ear, Frequency, ThresholdPair, ThresholdSet, classify};

use crate::collaborators::{
    AnalyzedThresholds, AssessmentSubmission, CollaboratorError, SavedAssessment,
};
use crate::error::{Notice, WorkflowError};

/// Where the assessment currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Thresholds are being entered or merged from analysis.
    Collecting,
    /// A diagnosis has been computed and shown; edits are locked out until
    /// the user starts over.
    Reviewed,
}

/// Which external call is outstanding, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingCall {
    Analysis,
    Save,
}

/// Proof that a save was begun; consumed by [`AssessmentWorkflow::complete_save`].
#[must_use]
#[derive(Debug, Clone)]
pub struct SaveTicket {
    generation: u64,
    pub submission: AssessmentSubmission,
}

/// Proof that an analysis was begun; consumed by
/// [`AssessmentWorkflow::complete_analysis`].
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct AnalysisTicket {
    generation: u64,
}

/// Result of a completed submission, as shown on the review screen.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub diagnosis: Diagnosis,
    pub recommendations: Vec<Recommendation>,
    pub notice: Option<Notice>,
}

/// Result of a completed (or abandoned) image analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOutcome {
    /// Whether any thresholds were merged. False on failure *and* on a
    /// stale completion discarded after a reset — in both cases the stored
    /// thresholds are exactly as they were.
    pub applied: bool,
    pub notice: Option<Notice>,
}

/// One assessment session's state. Created fresh per assessment; never
/// persisted locally.
#[derive(Debug, Clone)]
pub struct AssessmentWorkflow {
    id: Uuid,
    phase: Phase,
    thresholds: ThresholdPair,
    diagnosis: Option<Diagnosis>,
    recommendations: Vec<Recommendation>,
    pending: Option<PendingCall>,
    generation: u64,
}

impl Default for AssessmentWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentWorkflow {
    pub fn new() -> Self {
        AssessmentWorkflow {
            id: Uuid::new_v4(),
            phase: Phase::Collecting,
            thresholds: ThresholdPair::default(),
            diagnosis: None,
            recommendations: Vec::new(),
            pending: None,
            generation: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn thresholds(&self) -> &ThresholdPair {
        &self.thresholds
    }

    pub fn threshold(&self, ear: Ear, freq: Frequency) -> i32 {
        self.ear(ear).get(freq)
    }

    /// The diagnosis computed by the last submit, if any.
    pub fn diagnosis(&self) -> Option<Diagnosis> {
        self.diagnosis
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// True while a persistence or analysis call is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn ear(&self, ear: Ear) -> &ThresholdSet {
        match ear {
            Ear::Right => &self.thresholds.right,
            Ear::Left => &self.thresholds.left,
        }
    }

    fn ear_mut(&mut self, ear: Ear) -> &mut ThresholdSet {
        match ear {
            Ear::Right => &mut self.thresholds.right,
            Ear::Left => &mut self.thresholds.left,
        }
    }

    fn require_collecting(&self) -> Result<(), WorkflowError> {
        match self.phase {
            Phase::Collecting => Ok(()),
            Phase::Reviewed => Err(WorkflowError::NotCollecting),
        }
    }

    fn require_idle(&self) -> Result<(), WorkflowError> {
        if self.pending.is_some() {
            return Err(WorkflowError::OperationInProgress);
        }
        Ok(())
    }

    /// Overwrite one threshold. Collecting phase only, and not while a call
    /// is outstanding — a pending save must persist exactly the snapshot it
    /// was given, and a pending analysis would race the edit.
    pub fn set_threshold(
        &mut self,
        ear: Ear,
        freq: Frequency,
        db: i32,
    ) -> Result<(), WorkflowError> {
        self.require_collecting()?;
        self.require_idle()?;
        self.ear_mut(ear).set(freq, db);
        Ok(())
    }

    /// [`AssessmentWorkflow::set_threshold`] for untyped form input; rejects
    /// frequencies outside the fixed set.
    pub fn set_threshold_hz(&mut self, ear: Ear, hz: u32, db: i32) -> Result<(), WorkflowError> {
        let freq = Frequency::from_hz(hz)?;
        self.set_threshold(ear, freq, db)
    }

    /// Compute the diagnosis and mark a save pending.
    ///
    /// The diagnosis is derived synchronously here, before any network
    /// traffic, so what the user eventually sees never depends on the
    /// persistence call's fate.
    pub fn begin_save(&mut self, notes: &str) -> Result<SaveTicket, WorkflowError> {
        self.require_collecting()?;
        self.require_idle()?;

        let diagnosis = classify(&self.thresholds.right, &self.thresholds.left);
        self.diagnosis = Some(diagnosis);
        self.pending = Some(PendingCall::Save);

        Ok(SaveTicket {
            generation: self.generation,
            submission: AssessmentSubmission {
                thresholds: self.thresholds,
                diagnosis,
                notes: notes.to_string(),
            },
        })
    }

    /// Apply the persistence result and move to `Reviewed`.
    ///
    /// The transition happens whether or not the save succeeded; failure
    /// only costs the recommendations and raises an advisory notice.
    /// Returns `None` for a stale ticket (the workflow was reset while the
    /// call was in flight).
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<SavedAssessment, CollaboratorError>,
    ) -> Option<ReviewOutcome> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending = None;
        self.phase = Phase::Reviewed;

        let notice = match result {
            Ok(saved) => {
                self.recommendations = recommendation::retain_valid(saved.recommendations);
                None
            }
            Err(_) => {
                self.recommendations.clear();
                Some(Notice::HistoryNotSaved)
            }
        };

        Some(ReviewOutcome {
            diagnosis: ticket.submission.diagnosis,
            recommendations: self.recommendations.clone(),
            notice,
        })
    }

    /// Mark an image analysis pending.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, WorkflowError> {
        self.require_collecting()?;
        self.require_idle()?;
        self.pending = Some(PendingCall::Analysis);
        Ok(AnalysisTicket {
            generation: self.generation,
        })
    }

    /// Apply the analysis result. On success both ears' partial readings are
    /// merged in; on failure (or a stale ticket) the stored thresholds are
    /// untouched.
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        result: Result<AnalyzedThresholds, CollaboratorError>,
    ) -> AnalysisOutcome {
        if ticket.generation != self.generation {
            return AnalysisOutcome {
                applied: false,
                notice: None,
            };
        }
        self.pending = None;

        match result {
            Ok(analyzed) => {
                self.thresholds.right.merge(&analyzed.right);
                self.thresholds.left.merge(&analyzed.left);
                AnalysisOutcome {
                    applied: true,
                    notice: None,
                }
            }
            Err(_) => AnalysisOutcome {
                applied: false,
                notice: Some(Notice::AnalysisUnavailable),
            },
        }
    }

    /// "Start Over": back from the review screen to collecting. Threshold
    /// values are retained so the user can adjust rather than re-enter;
    /// diagnosis and recommendations are cleared.
    pub fn restart(&mut self) -> Result<(), WorkflowError> {
        match self.phase {
            Phase::Reviewed => {
                self.phase = Phase::Collecting;
                self.diagnosis = None;
                self.recommendations.clear();
                self.pending = None;
                self.generation += 1;
                Ok(())
            }
            Phase::Collecting => Err(WorkflowError::NotReviewed),
        }
    }

    /// Hard reset to a fresh collecting state, valid in any phase. Any
    /// in-flight call is abandoned: its ticket's generation no longer
    /// matches, so its eventual completion is discarded.
    pub fn reset(&mut self) {
        self.phase = Phase::Collecting;
        self.thresholds = ThresholdPair::default();
        self.diagnosis = None;
        self.recommendations.clear();
        self.pending = None;
        self.generation += 1;
    }
}
