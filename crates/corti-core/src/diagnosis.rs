//! Pure-tone-average severity classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::thresholds::ThresholdSet;

/// Hearing-loss severity, ordered from no loss to profound loss.
///
/// The serialized labels are the exact strings the backend stores and the
/// front-end displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Diagnosis {
    #[serde(rename = "Normal Hearing")]
    Normal,
    #[serde(rename = "Mild Hearing Loss")]
    Mild,
    #[serde(rename = "Moderate Hearing Loss")]
    Moderate,
    #[serde(rename = "Moderately Severe Hearing Loss")]
    ModeratelySevere,
    #[serde(rename = "Severe Hearing Loss")]
    Severe,
    #[serde(rename = "Profound Hearing Loss")]
    Profound,
}

impl Diagnosis {
    /// Map a binaural pure-tone average (dB HL) onto a severity band.
    /// Bands are half-open: the lower bound is inclusive.
    pub fn from_average(average: f64) -> Diagnosis {
        if average < 25.0 {
            Diagnosis::Normal
        } else if average < 40.0 {
            Diagnosis::Mild
        } else if average < 55.0 {
            Diagnosis::Moderate
        } else if average < 70.0 {
            Diagnosis::ModeratelySevere
        } else if average < 90.0 {
            Diagnosis::Severe
        } else {
            Diagnosis::Profound
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::Normal => "Normal Hearing",
            Diagnosis::Mild => "Mild Hearing Loss",
            Diagnosis::Moderate => "Moderate Hearing Loss",
            Diagnosis::ModeratelySevere => "Moderately Severe Hearing Loss",
            Diagnosis::Severe => "Severe Hearing Loss",
            Diagnosis::Profound => "Profound Hearing Loss",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a pair of fully populated threshold sets.
///
/// Each ear's pure-tone average is the mean of its four mid-range bands;
/// the two ear averages are then averaged again and mapped through
/// [`Diagnosis::from_average`]. Total and deterministic — there is no error
/// path, because threshold sets are total by construction.
pub fn classify(right: &ThresholdSet, left: &ThresholdSet) -> Diagnosis {
    let average = (right.pure_tone_average() + left.pure_tone_average()) / 2.0;
    Diagnosis::from_average(average)
}
