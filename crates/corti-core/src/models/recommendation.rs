use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::hearing_aid::HearingAid;

/// A device suggestion returned by the backend after an assessment is saved.
///
/// The backend may return a recommendation whose `hearingAid` is absent —
/// a dangling device reference, not an error. [`retain_valid`] drops those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Recommendation {
    #[serde(default)]
    pub hearing_aid: Option<HearingAid>,
}

/// Drop recommendations with a dangling device reference.
pub fn retain_valid(recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations
        .into_iter()
        .filter(|r| r.hearing_aid.is_some())
        .collect()
}
