//! Patient-portal REST binding.
//!
//! Mirrors [`super::api`] but reads the patient token key exclusively, so a
//! portal request can never go out with a staff credential attached.

use super::http::{self, ApiError};
use super::types::*;
use crate::state::session::PatientSession;

fn token() -> Option<String> {
    PatientSession::browser().token()
}

pub async fn my_appointments() -> Result<Vec<Appointment>, ApiError> {
    http::get_json("/appointments/my-appointments", token()).await
}

pub async fn portal_doctors() -> Result<Vec<StaffMember>, ApiError> {
    http::get_json("/appointments/patient/doctors", token()).await
}

pub async fn available_slots(doctor_id: &str, date: &str) -> Result<AvailableSlots, ApiError> {
    http::get_json(
        &format!("/schedules/patient/{doctor_id}/available-slots?date={date}"),
        token(),
    )
    .await
}

pub async fn book_appointment(body: &BookAppointmentRequest) -> Result<Appointment, ApiError> {
    http::send_json("POST", "/appointments/book-by-patient", token(), body).await
}

pub async fn my_bill() -> Result<Bill, ApiError> {
    http::get_json("/patient/my-bill", token()).await
}

pub async fn my_ehr() -> Result<EhrRecord, ApiError> {
    http::get_json("/patient/my-ehr", token()).await
}

pub async fn patient_notifications() -> Result<Vec<Notification>, ApiError> {
    http::get_json("/notifications/patient", token()).await
}

pub async fn mark_patient_notifications_read() -> Result<(), ApiError> {
    http::send_unit("PATCH", "/notifications/patient/mark-read", token(), &serde_json::json!({})).await
}
