use super::*;

// =============================================================
// Role wire format
// =============================================================

#[test]
fn role_round_trips_pascal_case() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}

#[test]
fn role_rejects_unknown_string() {
    let result: Result<Role, _> = serde_json::from_str("\"Janitor\"");
    assert!(result.is_err());
}

#[test]
fn role_all_variants_are_distinct() {
    for (i, a) in Role::ALL.iter().enumerate() {
        for b in &Role::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// Login payload shape
// =============================================================

#[test]
fn staff_user_parses_flattened_login_payload() {
    let raw = r#"{
        "_id": "64af01",
        "firstName": "Asha",
        "lastName": "Verma",
        "email": "asha@hopewell.test",
        "role": "Doctor",
        "token": "jwt-abc"
    }"#;
    let user: StaffUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::Doctor);
    assert_eq!(user.token, "jwt-abc");
    assert_eq!(user.full_name(), "Asha Verma");
}

#[test]
fn patient_login_response_carries_token_and_profile() {
    let raw = r#"{
        "token": "jwt-pat",
        "patient": {
            "_id": "64af02",
            "uhid": "UH-1001",
            "firstName": "Ravi",
            "lastName": "Kumar",
            "phone": "+911234567890"
        }
    }"#;
    let resp: PatientLoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "jwt-pat");
    assert_eq!(resp.patient.uhid, "UH-1001");
}

// =============================================================
// Deleted-reference tolerance
// =============================================================

#[test]
fn appointment_tolerates_null_populated_refs() {
    let raw = r#"{
        "_id": "a1",
        "patient": null,
        "doctor": null,
        "appointmentDate": "2026-09-01",
        "appointmentTime": "10:00",
        "status": "Pending"
    }"#;
    let appt: Appointment = serde_json::from_str(raw).unwrap();
    assert!(appt.patient.is_none());
    assert!(appt.doctor.is_none());
    assert_eq!(appt.status, AppointmentStatus::Pending);
}

#[test]
fn bill_balance_due_is_total_minus_paid() {
    let raw = r#"{
        "_id": "b1",
        "totalAmount": 250.0,
        "amountPaid": 100.0,
        "status": "Partially Paid"
    }"#;
    let bill: Bill = serde_json::from_str(raw).unwrap();
    assert!((bill.balance_due() - 150.0).abs() < f64::EPSILON);
    assert!(bill.line_items.is_empty());
    assert!(bill.payment_history.is_empty());
}

// =============================================================
// Shift wire strings
// =============================================================

#[test]
fn shift_type_uses_hyphenated_wire_names() {
    assert_eq!(serde_json::to_string(&ShiftType::DayOff).unwrap(), "\"Day-Off\"");
    assert_eq!(serde_json::to_string(&ShiftType::OnCall).unwrap(), "\"On-Call\"");
    let back: ShiftType = serde_json::from_str("\"Day-Off\"").unwrap();
    assert_eq!(back, ShiftType::DayOff);
}
