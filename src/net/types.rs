//! Request/response types shared across the REST bindings.
//!
//! Field names follow the backend's Mongo-flavored JSON (`_id`, camelCase);
//! serde rename attributes keep the Rust side idiomatic. Optional fields are
//! optional because the backend routinely omits them or because a referenced
//! record may have been deleted (populated refs come back as `null`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Closed staff role enumeration.
///
/// The backend sends these as PascalCase strings; anything outside the set
/// fails deserialization rather than mapping to a catch-all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Receptionist,
    Doctor,
    Nurse,
    Pharmacist,
    LabTechnician,
    Accountant,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Receptionist,
        Role::Doctor,
        Role::Nurse,
        Role::Pharmacist,
        Role::LabTechnician,
        Role::Accountant,
    ];

    /// Human-readable label, matching the wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Receptionist => "Receptionist",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Pharmacist => "Pharmacist",
            Role::LabTechnician => "LabTechnician",
            Role::Accountant => "Accountant",
        }
    }
}

/// Staff login request body for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Staff login response: token plus the profile fields, flattened.
///
/// This whole payload is what gets persisted under the staff session key,
/// so the bearer token and the cached profile travel together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl StaffUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A staff directory record (no token; richer HR fields).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub role: Role,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "joiningDate", default)]
    pub joining_date: Option<String>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(rename = "bloodGroup", default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub qualifications: Option<String>,
    #[serde(rename = "totalLeaveDays", default)]
    pub total_leave_days: Option<u32>,
    #[serde(rename = "leaveTaken", default)]
    pub leave_taken: Option<u32>,
    #[serde(rename = "leaveBalance", default)]
    pub leave_balance: Option<u32>,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body for `POST /auth/register` (admin registers a staff member).
#[derive(Clone, Debug, Serialize)]
pub struct RegisterStaffRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// A registered patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: String,
    pub uhid: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// True once a portal login account exists for this patient.
    #[serde(rename = "userAccount", default)]
    pub has_portal_account: bool,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body for registering a new patient at the reception desk.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterPatientRequest {
    pub uhid: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
}

/// The patient-portal profile, distinct from the staff shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub uhid: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl PatientUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response of `POST /patient/verify-otp`.
#[derive(Clone, Debug, Deserialize)]
pub struct PatientLoginResponse {
    pub token: String,
    pub patient: PatientUser,
}

/// Lightweight populated reference (doctor/patient on appointments etc.).
/// Deleted records come back as `null` on the parent, so parents hold
/// `Option<PersonRef>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub uhid: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl PersonRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub patient: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
    #[serde(rename = "appointmentTime")]
    pub appointment_time: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    #[serde(rename = "rejectionReason", default)]
    pub rejection_reason: Option<String>,
}

/// Body for booking an appointment (reception or patient portal).
#[derive(Clone, Debug, Serialize)]
pub struct BookAppointmentRequest {
    #[serde(rename = "patientId", skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: String,
    #[serde(rename = "appointmentTime")]
    pub appointment_time: String,
    pub reason: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AvailableSlots {
    #[serde(rename = "availableSlots")]
    pub available_slots: Vec<String>,
}

/// One weekday's availability in a doctor's schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: String,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Schedule {
    #[serde(rename = "weeklyAvailability")]
    pub weekly_availability: Vec<DayAvailability>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrescriptionStatus {
    Pending,
    Fulfilled,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Prescription {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub patient: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    pub medications: Vec<Medication>,
    pub status: PrescriptionStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreatePrescriptionRequest {
    #[serde(rename = "patientId")]
    pub patient_id: String,
    pub medications: Vec<Medication>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabTestStatus {
    Pending,
    Completed,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LabTest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub patient: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    #[serde(rename = "testName")]
    pub test_name: String,
    pub status: LabTestStatus,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "completedAt", default)]
    pub completed_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct OrderLabTestRequest {
    #[serde(rename = "patientId")]
    pub patient_id: String,
    #[serde(rename = "testName")]
    pub test_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(rename = "reorderLevel")]
    pub reorder_level: i64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpsertInventoryRequest {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(rename = "reorderLevel")]
    pub reorder_level: i64,
}

/// Billable service from the hospital's service catalog.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub cost: f64,
}

/// Body for adding an inventory item to the billable catalog.
#[derive(Clone, Debug, Serialize)]
pub struct AddServiceRequest {
    pub name: String,
    pub cost: f64,
    pub category: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LineItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub cost: f64,
    #[serde(default)]
    pub service: Option<ServiceItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Payment {
    pub amount: f64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    #[serde(rename = "paymentDate")]
    pub payment_date: String,
    #[serde(rename = "recordedBy", default)]
    pub recorded_by: Option<PersonRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Bill {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(rename = "lineItems", default)]
    pub line_items: Vec<LineItem>,
    #[serde(rename = "paymentHistory", default)]
    pub payment_history: Vec<Payment>,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    #[serde(rename = "amountPaid")]
    pub amount_paid: f64,
    pub status: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Bill {
    pub fn balance_due(&self) -> f64 {
        self.total_amount - self.amount_paid
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RecordPaymentRequest {
    pub amount: f64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    Casual,
    Sick,
    Earned,
}

impl LeaveType {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveType::Casual => "Casual",
            LeaveType::Sick => "Sick",
            LeaveType::Earned => "Earned",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct LeaveRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "staffMember", default)]
    pub staff_member: Option<PersonRef>,
    #[serde(rename = "leaveType")]
    pub leave_type: LeaveType,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub reason: String,
    pub status: LeaveStatus,
}

#[derive(Clone, Debug, Serialize)]
pub struct ApplyLeaveRequest {
    #[serde(rename = "leaveType")]
    pub leave_type: LeaveType,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub reason: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    #[serde(rename = "Day-Off")]
    DayOff,
    Morning,
    Evening,
    Night,
    #[serde(rename = "On-Call")]
    OnCall,
}

impl ShiftType {
    pub const ALL: [ShiftType; 5] = [
        ShiftType::DayOff,
        ShiftType::Morning,
        ShiftType::Evening,
        ShiftType::Night,
        ShiftType::OnCall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::DayOff => "Day-Off",
            ShiftType::Morning => "Morning",
            ShiftType::Evening => "Evening",
            ShiftType::Night => "Night",
            ShiftType::OnCall => "On-Call",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "staffMember", default)]
    pub staff_member: Option<PersonRef>,
    /// `YYYY-MM-DD` (the backend may append a time component; callers
    /// truncate to ten characters before keying).
    pub date: String,
    #[serde(rename = "shiftType")]
    pub shift_type: ShiftType,
}

#[derive(Clone, Debug, Serialize)]
pub struct SetShiftRequest {
    #[serde(rename = "staffMember")]
    pub staff_member: String,
    pub date: String,
    #[serde(rename = "shiftType")]
    pub shift_type: ShiftType,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VitalsEntry {
    #[serde(rename = "bloodPressure")]
    pub blood_pressure: String,
    pub temperature: String,
    #[serde(rename = "heartRate")]
    pub heart_rate: String,
    #[serde(rename = "respiratoryRate")]
    pub respiratory_rate: String,
    #[serde(rename = "recordedAt", default)]
    pub recorded_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RecordVitalsRequest {
    #[serde(rename = "bloodPressure")]
    pub blood_pressure: String,
    pub temperature: String,
    #[serde(rename = "heartRate")]
    pub heart_rate: String,
    #[serde(rename = "respiratoryRate")]
    pub respiratory_rate: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DiagnosisEntry {
    pub diagnosis: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "diagnosedAt", default)]
    pub diagnosed_at: Option<String>,
    #[serde(rename = "diagnosedBy", default)]
    pub diagnosed_by: Option<PersonRef>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AddDiagnosisRequest {
    pub diagnosis: String,
    pub notes: String,
}

/// A patient's electronic health record: vitals, diagnoses, and the
/// prescription/lab history folded in by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct EhrRecord {
    #[serde(default)]
    pub vitals: Vec<VitalsEntry>,
    #[serde(default)]
    pub diagnoses: Vec<DiagnosisEntry>,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
    #[serde(rename = "labReports", default)]
    pub lab_reports: Vec<LabTest>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub message: String,
    #[serde(rename = "isRead")]
    pub is_read: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct KpiSummary {
    #[serde(rename = "totalPatients")]
    pub total_patients: u64,
    #[serde(rename = "newPatientsToday")]
    pub new_patients_today: u64,
    #[serde(rename = "appointmentsToday")]
    pub appointments_today: u64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
}

/// Aggregation bucket: `_id` is the group key (a status or a date).
#[derive(Clone, Debug, Deserialize)]
pub struct CountBucket {
    #[serde(rename = "_id")]
    pub key: String,
    pub count: u64,
}
