use super::*;
use crate::net::types::LeaveType;

fn leave(id: &str, status: LeaveStatus) -> LeaveRequest {
    LeaveRequest {
        id: id.to_owned(),
        staff_member: None,
        leave_type: LeaveType::Casual,
        start_date: "2026-08-03".to_owned(),
        end_date: "2026-08-05".to_owned(),
        reason: format!("reason {id}"),
        status,
    }
}

#[test]
fn apply_status_flips_and_returns_prior() {
    let mut items = vec![leave("a", LeaveStatus::Pending), leave("b", LeaveStatus::Pending)];

    let prior = apply_status(&mut items, "b", LeaveStatus::Approved);

    assert_eq!(prior, Some(LeaveStatus::Pending));
    assert_eq!(items[0].status, LeaveStatus::Pending);
    assert_eq!(items[1].status, LeaveStatus::Approved);
}

#[test]
fn failed_decision_rolls_back_to_prior_status() {
    let mut items = vec![leave("a", LeaveStatus::Pending)];

    let prior = apply_status(&mut items, "a", LeaveStatus::Rejected)
        .unwrap_or(LeaveStatus::Pending);
    assert_eq!(items[0].status, LeaveStatus::Rejected);

    // The PATCH failed; restore what the snapshot captured.
    apply_status(&mut items, "a", prior);
    assert_eq!(items[0].status, LeaveStatus::Pending);
}

#[test]
fn unknown_id_touches_nothing() {
    let mut items = vec![leave("a", LeaveStatus::Pending)];

    assert_eq!(apply_status(&mut items, "missing", LeaveStatus::Approved), None);
    assert_eq!(items[0].status, LeaveStatus::Pending);
}
