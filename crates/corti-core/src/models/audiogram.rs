use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::recommendation::Recommendation;
use crate::thresholds::ThresholdPair;

/// Dashboard list entry for one saved hearing test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AudiogramSummary {
    pub id: String,
    pub created_at: jiff::Timestamp,
    #[ts(type = "{ right: Record<string, number>, left: Record<string, number> }")]
    pub thresholds: ThresholdPair,
}

/// Full detail view of one saved hearing test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Audiogram {
    pub id: String,
    pub created_at: jiff::Timestamp,
    #[ts(type = "{ right: Record<string, number>, left: Record<string, number> }")]
    pub thresholds: ThresholdPair,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
