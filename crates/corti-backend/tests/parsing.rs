use corti_assessment::AnalyzedThresholds;
use corti_backend::graphql::GraphQlResponse;
use corti_backend::operations::{BookedAppointment, CreatedAudiogram, Dashboard};
use corti_backend::ApiError;
use corti_core::models::{AppointmentStatus, retain_valid};
use corti_core::{Diagnosis, Frequency};

#[test]
fn envelope_yields_data_when_clean() {
    let body = r#"{"data": {"ok": true}}"#;
    let envelope: GraphQlResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
    let data = envelope.into_data().unwrap();
    assert_eq!(data["ok"], true);
}

#[test]
fn top_level_errors_win_over_partial_data() {
    let body = r#"{
        "data": {"ok": true},
        "errors": [{"message": "field unavailable"}, {"message": "try later"}]
    }"#;
    let envelope: GraphQlResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
    match envelope.into_data() {
        Err(ApiError::GraphQl(messages)) => {
            assert_eq!(messages, vec!["field unavailable", "try later"]);
        }
        other => panic!("expected GraphQl error, got {other:?}"),
    }
}

#[test]
fn missing_data_is_its_own_error() {
    let body = r#"{"data": null}"#;
    let envelope: GraphQlResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
    assert!(matches!(envelope.into_data(), Err(ApiError::MissingData)));
}

#[test]
fn created_audiogram_keeps_dangling_recommendations_on_the_wire() {
    // The backend can return a recommendation whose hearing aid was deleted.
    // Parsing keeps the entry; filtering is the workflow's job.
    let body = r#"{
        "id": "42",
        "diagnosis": "Mild Hearing Loss",
        "recommendations": [
            {"hearingAid": {"id": "7", "brand": "Phonak", "deviceModel": "Audeo L90", "price": 2499.0}},
            {"hearingAid": null}
        ]
    }"#;
    let created: CreatedAudiogram = serde_json::from_str(body).unwrap();
    assert_eq!(created.id, "42");
    assert_eq!(created.diagnosis, Diagnosis::Mild);
    assert_eq!(created.recommendations.len(), 2);
    assert!(created.recommendations[1].hearing_aid.is_none());

    let valid = retain_valid(created.recommendations);
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].hearing_aid.as_ref().unwrap().brand, "Phonak");
}

#[test]
fn dashboard_parses_history_and_appointments() {
    let body = r#"{
        "myAudiograms": [{
            "id": "1",
            "createdAt": "2026-08-01T14:30:00Z",
            "thresholds": {
                "right": {"125": 10, "250": 10, "500": 20, "1000": 20, "2000": 30, "4000": 40, "8000": 50},
                "left":  {"125": 10, "250": 10, "500": 20, "1000": 20, "2000": 30, "4000": 40, "8000": 50}
            }
        }],
        "myAppointments": [{
            "id": "9",
            "appointmentDate": "2026-09-03T09:00:00Z",
            "status": "confirmed",
            "hearingAid": {"brand": "Oticon", "deviceModel": "Real 1"}
        }]
    }"#;
    let dashboard: Dashboard = serde_json::from_str(body).unwrap();

    assert_eq!(dashboard.audiograms.len(), 1);
    let summary = &dashboard.audiograms[0];
    assert_eq!(summary.thresholds.right.get(Frequency::Hz4000), 40);
    assert_eq!(summary.thresholds.left.get(Frequency::Hz125), 10);

    assert_eq!(dashboard.appointments.len(), 1);
    let appointment = &dashboard.appointments[0];
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    assert_eq!(
        appointment.hearing_aid.as_ref().unwrap().device_model,
        "Real 1"
    );
}

#[test]
fn booked_appointment_parses_the_mutation_payload() {
    let body = r#"{"id": "15", "status": "pending"}"#;
    let booked: BookedAppointment = serde_json::from_str(body).unwrap();
    assert_eq!(booked.id, "15");
    assert_eq!(booked.status, AppointmentStatus::Pending);
}

#[test]
fn analysis_response_tolerates_nulls_and_missing_bands() {
    let body = r#"{
        "right": {"500": 35, "1000": null, "2000": 45},
        "left": {"500": 30}
    }"#;
    let analyzed: AnalyzedThresholds = serde_json::from_str(body).unwrap();
    assert_eq!(analyzed.right.get(500), Some(Some(35)));
    assert_eq!(analyzed.right.get(1000), Some(None));
    assert_eq!(analyzed.right.get(8000), None);
    assert_eq!(analyzed.left.get(500), Some(Some(30)));
}

#[test]
fn analysis_response_may_omit_an_ear() {
    let body = r#"{"right": {"500": 35}}"#;
    let analyzed: AnalyzedThresholds = serde_json::from_str(body).unwrap();
    assert!(!analyzed.right.is_empty());
    assert!(analyzed.left.is_empty());
}
