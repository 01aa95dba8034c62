// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget submission to the spreadsheet-backed intake endpoint.
//!
//! The endpoint is a Google Apps Script deployment that appends one row per
//! request; no response body is consumed. A failed submission surfaces as
//! [`Error::Submission`] at the call site, which reports it to the user and
//! keeps the form state so the retry is manual.

use super::{doctor_label, treatment_label, AppointmentRequest};
use crate::clinic::Doctor;
use crate::error::{Error, Result};
use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Replace `YOUR_SCRIPT_ID` with the actual Apps Script deployment id.
pub const DEFAULT_INTAKE_ENDPOINT: &str =
    "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec";

/// One intake row, serialized with the field names the spreadsheet script
/// expects. Unfilled optional fields are submitted as placeholder strings
/// rather than omitted, so every row has the same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub timestamp: String,
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    pub doctor: String,
    pub treatment: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: String,
    pub whatsapp_consent: String,
}

impl IntakeSubmission {
    /// Builds the row for a completed form, stamped with the current clinic
    /// local time (IST).
    pub fn from_request(
        request: &AppointmentRequest,
        doctor: Option<&Doctor>,
        treatment: Option<&str>,
    ) -> Self {
        Self {
            timestamp: now_ist(),
            patient_name: request.patient_name.clone(),
            phone: request.phone.clone(),
            email: or_placeholder(&request.email, "Not provided"),
            doctor: doctor_label(doctor).to_string(),
            treatment: treatment_label(treatment).to_string(),
            preferred_date: or_placeholder(&request.preferred_date, "Not specified"),
            preferred_time: or_placeholder(&request.preferred_time, "Any time"),
            notes: or_placeholder(&request.notes, "None"),
            whatsapp_consent: if request.whatsapp_consent { "Yes" } else { "No" }.to_string(),
        }
    }
}

/// POSTs one submission to the intake endpoint.
///
/// Success means the endpoint answered with a success status; the response
/// body is discarded.
pub async fn submit(endpoint: &str, submission: &IntakeSubmission) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("clinic_core/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Submission(e.to_string()))?;

    let response = client
        .post(endpoint)
        .json(submission)
        .send()
        .await
        .map_err(|e| Error::Submission(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Submission(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    Ok(())
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Current time in the clinic's timezone (IST, UTC+05:30), formatted the
/// way the spreadsheet displays it.
fn now_ist() -> String {
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("IST offset is in range");
    Utc::now()
        .with_timezone(&ist)
        .format("%d/%m/%Y, %I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinic;
    use chrono::NaiveDateTime;

    #[test]
    fn from_request_applies_row_placeholders() {
        let request = AppointmentRequest {
            patient_name: "Asha Rao".to_string(),
            phone: "+91 9000000001".to_string(),
            whatsapp_consent: true,
            ..AppointmentRequest::default()
        };

        let submission = IntakeSubmission::from_request(&request, None, None);
        assert_eq!(submission.email, "Not provided");
        assert_eq!(submission.doctor, "Any available doctor");
        assert_eq!(submission.treatment, "General consultation");
        assert_eq!(submission.preferred_date, "Not specified");
        assert_eq!(submission.preferred_time, "Any time");
        assert_eq!(submission.notes, "None");
        assert_eq!(submission.whatsapp_consent, "Yes");
    }

    #[test]
    fn from_request_keeps_filled_fields() {
        let clinic = clinic::dataset();
        let doctor = clinic.doctor("dr-raj").expect("doctor exists");
        let request = AppointmentRequest {
            patient_name: "Asha Rao".to_string(),
            phone: "+91 9000000001".to_string(),
            email: "asha@example.com".to_string(),
            preferred_date: "2026-08-10".to_string(),
            preferred_time: "6:00 PM - 9:00 PM".to_string(),
            notes: "Follow-up visit".to_string(),
            whatsapp_consent: false,
        };

        let submission = IntakeSubmission::from_request(&request, Some(doctor), Some("Suturing"));
        assert_eq!(submission.doctor, "Dr. P.M. Raj");
        assert_eq!(submission.treatment, "Suturing");
        assert_eq!(submission.whatsapp_consent, "No");
    }

    #[test]
    fn payload_serializes_with_camel_case_field_names() {
        let submission =
            IntakeSubmission::from_request(&AppointmentRequest::default(), None, None);
        let value = serde_json::to_value(&submission).expect("payload serializes");
        let object = value.as_object().expect("payload is an object");

        for field in [
            "timestamp",
            "patientName",
            "phone",
            "email",
            "doctor",
            "treatment",
            "preferredDate",
            "preferredTime",
            "notes",
            "whatsappConsent",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn timestamp_matches_the_spreadsheet_format() {
        let stamp = now_ist();
        NaiveDateTime::parse_from_str(&stamp, "%d/%m/%Y, %I:%M:%S %p")
            .expect("timestamp parses back");
    }

    #[tokio::test]
    async fn submit_to_invalid_endpoint_reports_submission_error() {
        let submission =
            IntakeSubmission::from_request(&AppointmentRequest::default(), None, None);
        let result = submit("not a valid endpoint", &submission).await;
        assert!(matches!(result, Err(Error::Submission(_))));
    }
}
