use super::*;
use crate::net::types::PersonRef;
use time::macros::date;

fn staff_ref(id: &str) -> Option<PersonRef> {
    Some(PersonRef {
        id: id.to_owned(),
        first_name: "Test".to_owned(),
        last_name: "Staff".to_owned(),
        uhid: None,
        role: None,
    })
}

fn entry(staff: &str, day: &str, shift: ShiftType) -> RosterEntry {
    RosterEntry {
        id: format!("{staff}-{day}"),
        staff_member: staff_ref(staff),
        date: day.to_owned(),
        shift_type: shift,
    }
}

fn leave(staff: &str, start: &str, end: &str, status: LeaveStatus) -> LeaveRequest {
    LeaveRequest {
        id: format!("l-{staff}-{start}"),
        staff_member: staff_ref(staff),
        leave_type: LeaveType::Sick,
        start_date: start.to_owned(),
        end_date: end.to_owned(),
        reason: "unwell".to_owned(),
        status,
    }
}

#[test]
fn unrostered_cell_defaults_to_day_off() {
    let grid = RosterGrid::build(&[], &[]);
    assert_eq!(
        grid.resolve("s1", date!(2026 - 08 - 24)),
        RosterCell::Shift(ShiftType::DayOff)
    );
}

#[test]
fn rostered_shift_is_returned() {
    let grid = RosterGrid::build(&[entry("s1", "2026-08-24", ShiftType::Night)], &[]);
    assert_eq!(
        grid.resolve("s1", date!(2026 - 08 - 24)),
        RosterCell::Shift(ShiftType::Night)
    );
    // other staff unaffected
    assert_eq!(
        grid.resolve("s2", date!(2026 - 08 - 24)),
        RosterCell::Shift(ShiftType::DayOff)
    );
}

#[test]
fn approved_leave_shadows_the_shift_for_every_spanned_day() {
    let grid = RosterGrid::build(
        &[entry("s1", "2026-08-25", ShiftType::Morning)],
        &[leave("s1", "2026-08-24", "2026-08-26", LeaveStatus::Approved)],
    );
    for day in [date!(2026 - 08 - 24), date!(2026 - 08 - 25), date!(2026 - 08 - 26)] {
        assert_eq!(grid.resolve("s1", day), RosterCell::OnLeave(LeaveType::Sick));
    }
    // day after the span is back to the roster
    assert_eq!(
        grid.resolve("s1", date!(2026 - 08 - 27)),
        RosterCell::Shift(ShiftType::DayOff)
    );
}

#[test]
fn pending_and_rejected_leaves_do_not_block_rostering() {
    let grid = RosterGrid::build(
        &[entry("s1", "2026-08-24", ShiftType::Evening)],
        &[
            leave("s1", "2026-08-24", "2026-08-24", LeaveStatus::Pending),
            leave("s1", "2026-08-25", "2026-08-25", LeaveStatus::Rejected),
        ],
    );
    assert_eq!(
        grid.resolve("s1", date!(2026 - 08 - 24)),
        RosterCell::Shift(ShiftType::Evening)
    );
    assert_eq!(
        grid.resolve("s1", date!(2026 - 08 - 25)),
        RosterCell::Shift(ShiftType::DayOff)
    );
}

#[test]
fn entries_with_deleted_staff_or_bad_dates_are_skipped() {
    let mut orphan = entry("s1", "2026-08-24", ShiftType::Morning);
    orphan.staff_member = None;
    let bad_date = entry("s2", "someday", ShiftType::Morning);

    let grid = RosterGrid::build(&[orphan, bad_date], &[]);
    assert_eq!(
        grid.resolve("s1", date!(2026 - 08 - 24)),
        RosterCell::Shift(ShiftType::DayOff)
    );
    assert_eq!(
        grid.resolve("s2", date!(2026 - 08 - 24)),
        RosterCell::Shift(ShiftType::DayOff)
    );
}

#[test]
fn timestamps_on_roster_dates_are_normalized() {
    let grid = RosterGrid::build(
        &[entry("s1", "2026-08-24T00:00:00.000Z", ShiftType::OnCall)],
        &[],
    );
    assert_eq!(
        grid.resolve("s1", date!(2026 - 08 - 24)),
        RosterCell::Shift(ShiftType::OnCall)
    );
}
