//! Weekly roster grid resolution.
//!
//! The grid shows one row per staff member and one column per day. A cell
//! is either an editable shift or a read-only "on leave" marker: an
//! approved leave spanning that day shadows whatever shift is rostered.
//! Pending or rejected leaves do not block rostering.

#[cfg(test)]
#[path = "roster_grid_test.rs"]
mod roster_grid_test;

use std::collections::HashMap;

use time::Date;

use crate::net::types::{LeaveRequest, LeaveStatus, LeaveType, RosterEntry, ShiftType};
use crate::util::dates::{expand_span, format_iso_date, parse_iso_date};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterCell {
    /// Approved leave wins over any rostered shift.
    OnLeave(LeaveType),
    Shift(ShiftType),
}

/// Lookup maps keyed by `(staff id, YYYY-MM-DD)`.
#[derive(Debug, Default)]
pub struct RosterGrid {
    shifts: HashMap<(String, String), ShiftType>,
    leaves: HashMap<(String, String), LeaveType>,
}

impl RosterGrid {
    pub fn build(entries: &[RosterEntry], leaves: &[LeaveRequest]) -> Self {
        let mut grid = Self::default();

        for entry in entries {
            let Some(staff) = &entry.staff_member else {
                continue;
            };
            let Some(date) = parse_iso_date(&entry.date) else {
                continue;
            };
            grid.shifts
                .insert((staff.id.clone(), format_iso_date(date)), entry.shift_type);
        }

        for leave in leaves {
            if leave.status != LeaveStatus::Approved {
                continue;
            }
            let Some(staff) = &leave.staff_member else {
                continue;
            };
            let (Some(start), Some(end)) = (
                parse_iso_date(&leave.start_date),
                parse_iso_date(&leave.end_date),
            ) else {
                continue;
            };
            for day in expand_span(start, end) {
                grid.leaves
                    .insert((staff.id.clone(), format_iso_date(day)), leave.leave_type);
            }
        }

        grid
    }

    /// Resolve one cell. Staff with nothing rostered default to `Day-Off`.
    pub fn resolve(&self, staff_id: &str, day: Date) -> RosterCell {
        let key = (staff_id.to_owned(), format_iso_date(day));
        if let Some(leave_type) = self.leaves.get(&key) {
            return RosterCell::OnLeave(*leave_type);
        }
        RosterCell::Shift(self.shifts.get(&key).copied().unwrap_or(ShiftType::DayOff))
    }
}
