//! Staff REST binding.
//!
//! Every request reads the staff session key fresh from storage and, if a
//! token is present, attaches it as a bearer credential. This binding never
//! looks at the patient token.

use super::http::{self, ApiError};
use super::types::*;
use crate::state::session::StaffSession;

fn token() -> Option<String> {
    StaffSession::browser().token()
}

// ---- auth ----

pub async fn login(email: &str, password: &str) -> Result<StaffUser, ApiError> {
    let body = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    // No token on purpose: login is the one unauthenticated staff call.
    http::send_json("POST", "/auth/login", None, &body).await
}

pub async fn register_staff(body: &RegisterStaffRequest) -> Result<StaffMember, ApiError> {
    http::send_json("POST", "/auth/register", token(), body).await
}

// ---- staff directory ----

pub async fn list_staff() -> Result<Vec<StaffMember>, ApiError> {
    http::get_json("/staff", token()).await
}

pub async fn get_staff_me() -> Result<StaffMember, ApiError> {
    http::get_json("/staff/me", token()).await
}

pub async fn update_staff(id: &str, body: &serde_json::Value) -> Result<StaffMember, ApiError> {
    http::send_json("PUT", &format!("/staff/{id}"), token(), body).await
}

pub async fn delete_staff(id: &str) -> Result<(), ApiError> {
    http::send_unit("DELETE", &format!("/staff/{id}"), token(), &serde_json::json!({})).await
}

// ---- patients ----

pub async fn list_patients() -> Result<Vec<Patient>, ApiError> {
    http::get_json("/patients", token()).await
}

pub async fn register_patient(body: &RegisterPatientRequest) -> Result<Patient, ApiError> {
    http::send_json("POST", "/staff/patients", token(), body).await
}

pub async fn list_staff_patients() -> Result<Vec<Patient>, ApiError> {
    http::get_json("/staff-patients", token()).await
}

pub async fn get_staff_patient(id: &str) -> Result<Patient, ApiError> {
    http::get_json(&format!("/staff-patients/{id}"), token()).await
}

/// Create a portal account so the patient can log in with OTP.
pub async fn create_portal_account(patient_id: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "patientId": patient_id });
    http::send_unit("POST", "/patient/create-portal", token(), &body).await
}

// ---- appointments ----

pub async fn list_appointments() -> Result<Vec<Appointment>, ApiError> {
    http::get_json("/appointments", token()).await
}

pub async fn list_doctors() -> Result<Vec<StaffMember>, ApiError> {
    http::get_json("/appointments/doctors", token()).await
}

pub async fn book_appointment(body: &BookAppointmentRequest) -> Result<Appointment, ApiError> {
    http::send_json("POST", "/appointments", token(), body).await
}

pub async fn set_appointment_status(
    id: &str,
    status: AppointmentStatus,
    rejection_reason: Option<&str>,
) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "status": status,
        "rejectionReason": rejection_reason,
    });
    http::send_unit("PATCH", &format!("/appointments/{id}/status"), token(), &body).await
}

pub async fn available_slots(doctor_id: &str, date: &str) -> Result<AvailableSlots, ApiError> {
    http::get_json(
        &format!("/schedules/{doctor_id}/available-slots?date={date}"),
        token(),
    )
    .await
}

// ---- schedules ----

pub async fn get_my_schedule() -> Result<Schedule, ApiError> {
    http::get_json("/schedules/my-schedule", token()).await
}

pub async fn update_my_availability(days: &[DayAvailability]) -> Result<Schedule, ApiError> {
    let body = serde_json::json!({ "weeklyAvailability": days });
    http::send_json("PUT", "/schedules/my-schedule/availability", token(), &body).await
}

// ---- EHR ----

pub async fn get_ehr(patient_id: &str) -> Result<EhrRecord, ApiError> {
    http::get_json(&format!("/ehr/{patient_id}"), token()).await
}

pub async fn record_vitals(patient_id: &str, body: &RecordVitalsRequest) -> Result<(), ApiError> {
    http::send_unit("POST", &format!("/ehr/{patient_id}/vitals"), token(), body).await
}

pub async fn add_diagnosis(patient_id: &str, body: &AddDiagnosisRequest) -> Result<(), ApiError> {
    http::send_unit("POST", &format!("/ehr/{patient_id}/diagnosis"), token(), body).await
}

// ---- prescriptions ----

pub async fn create_prescription(body: &CreatePrescriptionRequest) -> Result<Prescription, ApiError> {
    http::send_json("POST", "/prescriptions", token(), body).await
}

pub async fn pending_prescriptions() -> Result<Vec<Prescription>, ApiError> {
    http::get_json("/prescriptions/pending", token()).await
}

pub async fn all_prescriptions() -> Result<Vec<Prescription>, ApiError> {
    http::get_json("/prescriptions/all", token()).await
}

pub async fn fulfill_prescription(id: &str) -> Result<(), ApiError> {
    http::send_unit("PATCH", &format!("/prescriptions/{id}/fulfill"), token(), &serde_json::json!({})).await
}

// ---- lab tests ----

pub async fn order_lab_test(body: &OrderLabTestRequest) -> Result<LabTest, ApiError> {
    http::send_json("POST", "/labtests", token(), body).await
}

pub async fn pending_lab_tests() -> Result<Vec<LabTest>, ApiError> {
    http::get_json("/labtests/pending", token()).await
}

pub async fn all_lab_tests() -> Result<Vec<LabTest>, ApiError> {
    http::get_json("/labtests/all", token()).await
}

pub async fn complete_lab_test(id: &str, result: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "result": result });
    http::send_unit("PATCH", &format!("/labtests/{id}/complete"), token(), &body).await
}

// ---- inventory ----

pub async fn list_inventory() -> Result<Vec<InventoryItem>, ApiError> {
    http::get_json("/inventory", token()).await
}

pub async fn low_stock_inventory() -> Result<Vec<InventoryItem>, ApiError> {
    http::get_json("/inventory/low-stock", token()).await
}

pub async fn add_inventory_item(body: &UpsertInventoryRequest) -> Result<InventoryItem, ApiError> {
    http::send_json("POST", "/inventory", token(), body).await
}

pub async fn update_inventory_item(
    id: &str,
    body: &UpsertInventoryRequest,
) -> Result<InventoryItem, ApiError> {
    http::send_json("PATCH", &format!("/inventory/{id}"), token(), body).await
}

// ---- billing ----

pub async fn list_bills() -> Result<Vec<Bill>, ApiError> {
    http::get_json("/bills", token()).await
}

pub async fn get_patient_bill(patient_id: &str) -> Result<Bill, ApiError> {
    http::get_json(&format!("/bills/patient/{patient_id}"), token()).await
}

pub async fn record_payment(bill_id: &str, body: &RecordPaymentRequest) -> Result<Bill, ApiError> {
    http::send_json("POST", &format!("/bills/{bill_id}/payment"), token(), body).await
}

pub async fn list_services() -> Result<Vec<ServiceItem>, ApiError> {
    http::get_json("/services", token()).await
}

pub async fn add_service(body: &AddServiceRequest) -> Result<ServiceItem, ApiError> {
    http::send_json("POST", "/services", token(), body).await
}

// ---- leaves ----

pub async fn list_leaves() -> Result<Vec<LeaveRequest>, ApiError> {
    http::get_json("/leaves", token()).await
}

pub async fn my_leaves() -> Result<Vec<LeaveRequest>, ApiError> {
    http::get_json("/leaves/my-leaves", token()).await
}

pub async fn apply_leave(body: &ApplyLeaveRequest) -> Result<LeaveRequest, ApiError> {
    http::send_json("POST", "/leaves/apply", token(), body).await
}

pub async fn set_leave_status(id: &str, status: LeaveStatus) -> Result<(), ApiError> {
    let body = serde_json::json!({ "status": status });
    http::send_unit("PATCH", &format!("/leaves/{id}/status"), token(), &body).await
}

// ---- rosters ----

pub async fn roster_staff() -> Result<Vec<StaffMember>, ApiError> {
    http::get_json("/rosters/staff", token()).await
}

pub async fn list_rosters(start_date: &str, end_date: &str) -> Result<Vec<RosterEntry>, ApiError> {
    http::get_json(
        &format!("/rosters?startDate={start_date}&endDate={end_date}"),
        token(),
    )
    .await
}

pub async fn set_shift(body: &SetShiftRequest) -> Result<RosterEntry, ApiError> {
    http::send_json("POST", "/rosters", token(), body).await
}

// ---- analytics ----

pub async fn analytics_kpis() -> Result<KpiSummary, ApiError> {
    http::get_json("/analytics/kpis", token()).await
}

pub async fn appointments_by_status() -> Result<Vec<CountBucket>, ApiError> {
    http::get_json("/analytics/appointments-by-status", token()).await
}

pub async fn patient_registrations() -> Result<Vec<CountBucket>, ApiError> {
    http::get_json("/analytics/patient-registrations", token()).await
}

// ---- notifications ----

pub async fn staff_notifications() -> Result<Vec<Notification>, ApiError> {
    http::get_json("/notifications/staff", token()).await
}

pub async fn mark_staff_notifications_read() -> Result<(), ApiError> {
    http::send_unit("PATCH", "/notifications/staff/mark-read", token(), &serde_json::json!({})).await
}

// ---- patient portal bootstrap (staff-side OTP endpoints) ----
// The OTP request/verify pair is served unauthenticated; the original
// client routes it through the staff binding, so it lives here.

pub async fn request_otp(phone: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "phone": phone });
    http::send_unit("POST", "/patient/request-otp", None, &body).await
}

pub async fn verify_otp(phone: &str, otp: &str) -> Result<PatientLoginResponse, ApiError> {
    let body = serde_json::json!({ "phone": phone, "otp": otp });
    http::send_json("POST", "/patient/verify-otp", None, &body).await
}
