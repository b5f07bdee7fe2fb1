//! Indian mobile number entry rules shared by patient registration and the
//! portal login: a fixed `+91` prefix followed by up to ten digits.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

pub const PHONE_PREFIX: &str = "+91";

/// Filter a raw input-field value. The previous accepted value is returned
/// unchanged when the edit would break the prefix or add a non-digit.
pub fn sanitize_phone(current: &str, proposed: &str) -> String {
    let Some(rest) = proposed.strip_prefix(PHONE_PREFIX) else {
        return current.to_owned();
    };
    if rest.len() <= 10 && rest.chars().all(|c| c.is_ascii_digit()) {
        proposed.to_owned()
    } else {
        current.to_owned()
    }
}

/// A complete number: the prefix plus exactly ten digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone
        .strip_prefix(PHONE_PREFIX)
        .is_some_and(|rest| rest.len() == 10 && rest.chars().all(|c| c.is_ascii_digit()))
}
