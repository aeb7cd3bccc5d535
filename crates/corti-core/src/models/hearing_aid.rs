use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A hearing-aid device from the backend catalogue.
///
/// Different queries fetch different field subsets, so everything beyond the
/// identifying trio is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HearingAid {
    pub id: String,
    pub brand: String,
    pub device_model: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The brand/model pair shown against a fitting appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HearingAidSummary {
    pub brand: String,
    pub device_model: String,
}
