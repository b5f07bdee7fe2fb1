use super::*;

#[test]
fn accepts_digits_after_prefix() {
    assert_eq!(sanitize_phone("+91", "+919876543210"), "+919876543210");
    assert_eq!(sanitize_phone("+9198", "+91987"), "+91987");
}

#[test]
fn rejects_edits_that_break_the_prefix() {
    assert_eq!(sanitize_phone("+9198", "9198"), "+9198");
    assert_eq!(sanitize_phone("+9198", ""), "+9198");
}

#[test]
fn rejects_non_digits_and_overlong_input() {
    assert_eq!(sanitize_phone("+9198", "+9198a"), "+9198");
    assert_eq!(sanitize_phone("+919876543210", "+9198765432100"), "+919876543210");
}

#[test]
fn validity_requires_exactly_ten_digits() {
    assert!(is_valid_phone("+919876543210"));
    assert!(!is_valid_phone("+91987654321"));
    assert!(!is_valid_phone("9876543210"));
    assert!(!is_valid_phone("+91987654321x"));
}
