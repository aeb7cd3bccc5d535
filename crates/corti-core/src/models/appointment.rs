use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::hearing_aid::HearingAidSummary;

/// A booked (or requested) clinic appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub appointment_date: Option<jiff::Timestamp>,
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Present when the visit is a fitting or trial for a specific device.
    #[serde(default)]
    pub hearing_aid: Option<HearingAidSummary>,
}

/// Backend appointment lifecycle. New requests start as `pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// The fixed set of booking reasons offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AppointmentReason {
    #[serde(rename = "General Checkup")]
    GeneralCheckup,
    #[serde(rename = "Hearing Aid Fitting")]
    HearingAidFitting,
    #[serde(rename = "Maintenance")]
    Maintenance,
    #[serde(rename = "Consultation")]
    Consultation,
}

impl fmt::Display for AppointmentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppointmentReason::GeneralCheckup => "General Checkup",
            AppointmentReason::HearingAidFitting => "Hearing Aid Fitting",
            AppointmentReason::Maintenance => "Maintenance",
            AppointmentReason::Consultation => "Consultation",
        };
        f.write_str(label)
    }
}
