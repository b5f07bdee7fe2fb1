//! Staff directory spreadsheet export (CSV).

#[cfg(test)]
#[path = "spreadsheet_test.rs"]
mod spreadsheet_test;

use crate::net::types::StaffMember;

const HEADERS: [&str; 10] = [
    "First Name",
    "Last Name",
    "Role",
    "Email",
    "Phone Number",
    "Joining Date",
    "Blood Group",
    "Address",
    "Specialization",
    "Qualifications",
];

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_owned())
}

/// Serialize the staff list into CSV, one row per member.
pub fn staff_directory_csv(staff: &[StaffMember]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // Writing into a Vec cannot fail except on serialization bugs; surface
    // those as an empty export rather than a panic.
    let mut write = || -> Result<(), csv::Error> {
        writer.write_record(HEADERS)?;
        for member in staff {
            writer.write_record([
                member.first_name.clone(),
                member.last_name.clone(),
                member.role.as_str().to_owned(),
                member.email.clone(),
                cell(&member.phone),
                cell(&member.joining_date),
                cell(&member.blood_group),
                cell(&member.address),
                cell(&member.specialization),
                cell(&member.qualifications),
            ])?;
        }
        Ok(())
    };
    if write().is_err() {
        return String::new();
    }
    writer
        .into_inner()
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// `Staff_Directory_YYYY-MM-DD.csv`, named after the export day.
pub fn staff_directory_filename(today: time::Date) -> String {
    format!(
        "Staff_Directory_{}.csv",
        crate::util::dates::format_iso_date(today)
    )
}
