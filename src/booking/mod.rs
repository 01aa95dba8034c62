// SPDX-License-Identifier: MPL-2.0
//! Appointment request hand-off.
//!
//! The booking flow never stores anything server-side. A completed form is
//! handed off in one of two ways: a WhatsApp deep link pre-filled with a
//! templated text body, or a fire-and-forget JSON POST to the external
//! intake endpoint (see [`intake`]). Both render the same UI fallbacks when
//! no doctor or treatment was selected.

pub mod intake;

use crate::clinic::{Branch, Doctor};

/// Fallback label when the form was submitted without a doctor selection.
pub const ANY_AVAILABLE_DOCTOR: &str = "Any available doctor";

/// Fallback label when the form was submitted without a treatment selection.
pub const GENERAL_CONSULTATION: &str = "General consultation";

/// The state of a filled-in booking form.
///
/// Optional free-text fields use the empty string for "not filled in",
/// matching the form state the view layer keeps. The doctor and treatment
/// selections travel separately since they reference dataset records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentRequest {
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: String,
    pub whatsapp_consent: bool,
}

/// Display name for the doctor selection, with the UI fallback applied.
pub fn doctor_label(doctor: Option<&Doctor>) -> &str {
    doctor.map_or(ANY_AVAILABLE_DOCTOR, |doctor| doctor.name.as_str())
}

/// Display name for the treatment selection, with the UI fallback applied.
pub fn treatment_label(treatment: Option<&str>) -> &str {
    match treatment {
        Some(treatment) if !treatment.is_empty() => treatment,
        _ => GENERAL_CONSULTATION,
    }
}

/// The pre-submission WhatsApp body asking for an appointment slot.
pub fn booking_message(
    request: &AppointmentRequest,
    doctor: Option<&Doctor>,
    treatment: Option<&str>,
) -> String {
    let notes_block = if request.notes.is_empty() {
        String::new()
    } else {
        format!("*Additional Notes:*\n{}", request.notes)
    };

    format!(
        "Hello! I would like to book an appointment.\n\n\
         *Patient Details:*\n\
         Name: {name}\n\
         Phone: {phone}\n\
         Email: {email}\n\n\
         *Appointment Details:*\n\
         Doctor: {doctor}\n\
         Treatment: {treatment}\n\
         Preferred Date: {date}\n\
         Preferred Time: {time}\n\n\
         {notes_block}\n\n\
         Please confirm the appointment slot. Thank you!",
        name = request.patient_name,
        phone = request.phone,
        email = request.email,
        doctor = doctor_label(doctor),
        treatment = treatment_label(treatment),
        date = request.preferred_date,
        time = request.preferred_time,
    )
}

/// The post-submission WhatsApp body sent when the patient consented to
/// WhatsApp follow-up. Unfilled optional fields are omitted entirely here,
/// unlike [`booking_message`] which prints them blank.
pub fn confirmation_message(
    request: &AppointmentRequest,
    doctor: Option<&Doctor>,
    treatment: Option<&str>,
) -> String {
    let email_line = if request.email.is_empty() {
        String::new()
    } else {
        format!("Email: {}", request.email)
    };
    let date_line = if request.preferred_date.is_empty() {
        String::new()
    } else {
        format!("Preferred Date: {}", request.preferred_date)
    };
    let time_line = if request.preferred_time.is_empty() {
        String::new()
    } else {
        format!("Preferred Time: {}", request.preferred_time)
    };
    let notes_block = if request.notes.is_empty() {
        String::new()
    } else {
        format!("*Additional Notes:*\n{}", request.notes)
    };

    format!(
        "Hello! Thank you for choosing Advaith Clinic. Your appointment request \
         has been successfully submitted.\n\n\
         *Patient Details:*\n\
         Name: {name}\n\
         Phone: {phone}\n\
         {email_line}\n\n\
         *Appointment Details:*\n\
         Doctor: {doctor}\n\
         Treatment: {treatment}\n\
         {date_line}\n\
         {time_line}\n\n\
         {notes_block}\n\n\
         Please confirm my appointment slot. Thank you!",
        name = request.patient_name,
        phone = request.phone,
        doctor = doctor_label(doctor),
        treatment = treatment_label(treatment),
    )
}

/// Deep link opening WhatsApp against the branch's primary number with the
/// given body pre-filled. The phone number is reduced to digits only, as
/// `wa.me` requires.
pub fn whatsapp_url(branch: &Branch, message: &str) -> String {
    let phone: String = branch
        .phones
        .first()
        .map(|phone| phone.chars().filter(char::is_ascii_digit).collect())
        .unwrap_or_default();
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

/// Dial link for the branch's primary number, kept verbatim.
pub fn call_url(branch: &Branch) -> String {
    format!("tel:{}", branch.phones.first().map_or("", String::as_str))
}
