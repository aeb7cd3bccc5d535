//! The portal's GraphQL operations, typed end to end.

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use corti_core::models::{
    Appointment, AppointmentReason, AppointmentStatus, Audiogram, AudiogramSummary, HearingAid,
    Recommendation,
};
use corti_core::{Diagnosis, ThresholdPair};

use crate::client::PortalClient;
use crate::error::ApiError;

const CREATE_AUDIOGRAM: &str = "\
mutation CreateAudiogram($input: CreateAudiogramInput!) {
  createAudiogram(input: $input) {
    audiogram {
      id
      diagnosis
      recommendations {
        hearingAid { id brand deviceModel price }
      }
    }
    errors
  }
}";

const GET_USER_DATA: &str = "\
query GetUserData {
  myAudiograms { id createdAt thresholds }
  myAppointments {
    id
    appointmentDate
    status
    hearingAid { brand deviceModel }
  }
}";

const GET_ONE_AUDIOGRAM: &str = "\
query GetOneAudiogram($id: ID!) {
  audiogram(id: $id) {
    id
    createdAt
    thresholds
    notes
    recommendations {
      hearingAid { id brand deviceModel price imageUrl description }
    }
  }
}";

const GET_HEARING_AIDS: &str = "\
query GetHearingAids {
  hearingAids { id brand deviceModel }
}";

const CREATE_APPOINTMENT: &str = "\
mutation CreateAppointment($date: ISO8601DateTime!, $reason: String!, $hearingAidId: ID) {
  createAppointment(input: {
    appointmentDate: $date,
    reason: $reason,
    hearingAidId: $hearingAidId
  }) {
    appointment { id status }
    errors
  }
}";

/// An audiogram as the `createAudiogram` mutation returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedAudiogram {
    pub id: String,
    pub diagnosis: Diagnosis,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
struct CreateAudiogramPayload {
    audiogram: Option<CreatedAudiogram>,
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAudiogramData {
    create_audiogram: CreateAudiogramPayload,
}

/// Everything the dashboard shows: the patient's history and their
/// upcoming appointments, fetched in one round trip.
#[derive(Debug, Clone, Deserialize)]
pub struct Dashboard {
    #[serde(rename = "myAudiograms")]
    pub audiograms: Vec<AudiogramSummary>,
    #[serde(rename = "myAppointments")]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
struct AudiogramData {
    audiogram: Audiogram,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HearingAidsData {
    hearing_aids: Vec<HearingAid>,
}

/// A booking request. `hearing_aid_id` is set when the visit is about a
/// specific device (fitting, maintenance).
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub appointment_date: jiff::Timestamp,
    pub reason: AppointmentReason,
    pub hearing_aid_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookedAppointment {
    pub id: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Deserialize)]
struct CreateAppointmentPayload {
    appointment: Option<BookedAppointment>,
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAppointmentData {
    create_appointment: CreateAppointmentPayload,
}

impl PortalClient {
    /// Save a completed assessment to the patient's history. Returns the
    /// stored audiogram with the backend's device recommendations.
    pub async fn create_audiogram(
        &self,
        thresholds: &ThresholdPair,
        diagnosis: Diagnosis,
        notes: &str,
    ) -> Result<CreatedAudiogram, ApiError> {
        let variables = json!({
            "input": {
                "thresholds": thresholds,
                "diagnosis": diagnosis,
                "notes": notes,
            }
        });
        let data: CreateAudiogramData = self.execute(CREATE_AUDIOGRAM, variables).await?;

        if !data.create_audiogram.errors.is_empty() {
            return Err(ApiError::Rejected(data.create_audiogram.errors));
        }
        let audiogram = data.create_audiogram.audiogram.ok_or(ApiError::MissingData)?;
        info!(audiogram = %audiogram.id, "assessment saved to history");
        Ok(audiogram)
    }

    /// The patient's audiogram history and appointments.
    pub async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.execute(GET_USER_DATA, json!({})).await
    }

    /// One audiogram in full, with notes and device recommendations.
    pub async fn audiogram(&self, id: &str) -> Result<Audiogram, ApiError> {
        let data: AudiogramData = self
            .execute(GET_ONE_AUDIOGRAM, json!({ "id": id }))
            .await?;
        Ok(data.audiogram)
    }

    /// The bookable hearing-aid catalog.
    pub async fn hearing_aids(&self) -> Result<Vec<HearingAid>, ApiError> {
        let data: HearingAidsData = self.execute(GET_HEARING_AIDS, json!({})).await?;
        Ok(data.hearing_aids)
    }

    /// Book an appointment. The backend answers with the booking's initial
    /// status (normally pending until a clinician confirms).
    pub async fn create_appointment(
        &self,
        request: &NewAppointment,
    ) -> Result<BookedAppointment, ApiError> {
        let variables = json!({
            "date": request.appointment_date,
            "reason": request.reason,
            "hearingAidId": request.hearing_aid_id,
        });
        let data: CreateAppointmentData = self.execute(CREATE_APPOINTMENT, variables).await?;

        if !data.create_appointment.errors.is_empty() {
            return Err(ApiError::Rejected(data.create_appointment.errors));
        }
        let appointment = data
            .create_appointment
            .appointment
            .ok_or(ApiError::MissingData)?;
        info!(appointment = %appointment.id, status = ?appointment.status, "appointment booked");
        Ok(appointment)
    }
}
