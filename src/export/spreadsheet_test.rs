use super::*;
use crate::net::types::Role;
use time::macros::date;

fn member(first: &str, role: Role) -> StaffMember {
    StaffMember {
        id: first.to_lowercase(),
        first_name: first.to_owned(),
        last_name: "Test".to_owned(),
        role,
        email: format!("{}@hopewell.test", first.to_lowercase()),
        phone: Some("+911112223334".to_owned()),
        joining_date: Some("2024-01-15".to_owned()),
        date_of_birth: None,
        blood_group: None,
        address: None,
        specialization: None,
        qualifications: None,
        total_leave_days: None,
        leave_taken: None,
        leave_balance: None,
    }
}

#[test]
fn csv_has_header_row_plus_one_row_per_member() {
    let csv = staff_directory_csv(&[member("Asha", Role::Doctor), member("Ravi", Role::Nurse)]);
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("First Name,Last Name,Role,Email"));
    assert!(lines[1].contains("Asha"));
    assert!(lines[1].contains("Doctor"));
    assert!(lines[2].contains("Ravi"));
}

#[test]
fn missing_optional_fields_render_as_na() {
    let csv = staff_directory_csv(&[member("Asha", Role::Doctor)]);
    // blood group, address, specialization, qualifications
    assert!(csv.contains("N/A,N/A,N/A,N/A"));
}

#[test]
fn empty_staff_list_still_produces_headers() {
    let csv = staff_directory_csv(&[]);
    assert_eq!(csv.trim_end().lines().count(), 1);
}

#[test]
fn filename_is_dated() {
    assert_eq!(
        staff_directory_filename(date!(2026 - 08 - 29)),
        "Staff_Directory_2026-08-29.csv"
    );
}
