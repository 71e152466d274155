//! Field validation rules for the registration form
//!
//! Pure predicates plus an aggregate pass over the whole field set. The
//! functions never fail: any input string maps to a bool or to an error
//! map, and the messages here are the exact strings surfaced in the UI.

use crate::state::{Field, FieldValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Fields currently failing validation, with their message
pub type ErrorMap = BTreeMap<Field, &'static str>;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const INVALID_PHONE: &str = "Please enter a valid 10-digit phone number";
pub const INVALID_PAN: &str = "Please enter a valid PAN number (e.g., ABCDE1234F)";
pub const INVALID_AADHAR: &str = "Please enter a valid 12-digit Aadhar number";

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("invalid phone pattern"));

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("invalid PAN pattern"));

static AADHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("invalid Aadhar pattern"));

/// Single-level domain check only: some non-whitespace/non-@ characters,
/// one `@`, more of the same, one `.`, more of the same.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Exactly 10 decimal digits
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// 5 uppercase letters, 4 digits, 1 uppercase letter. Callers uppercase
/// the input before this check.
pub fn is_valid_pan(value: &str) -> bool {
    PAN_RE.is_match(value)
}

/// Exactly 12 decimal digits
pub fn is_valid_aadhar(value: &str) -> bool {
    AADHAR_RE.is_match(value)
}

/// At least [`MIN_PASSWORD_LEN`] characters, no complexity requirement
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

/// Message for a field that failed the required check
pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First name is required",
        Field::LastName => "Last name is required",
        Field::Username => "Username is required",
        Field::Email => "Email is required",
        Field::Password => "Password is required",
        Field::CountryCode => "Country code is required",
        Field::PhoneNumber => "Phone number is required",
        Field::Country => "Country is required",
        Field::City => "City is required",
        Field::PanNumber => "PAN number is required",
        Field::AadharNumber => "Aadhar number is required",
    }
}

/// Validate every field: required first (non-empty after trimming), then
/// the field's format rule. The required message always wins; at most one
/// message per field.
pub fn validate_all(values: &FieldValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in Field::ALL {
        let value = values.get(field);
        if value.trim().is_empty() {
            errors.insert(field, required_message(field));
            continue;
        }

        let format_error = match field {
            Field::Email if !is_valid_email(value) => Some(INVALID_EMAIL),
            Field::Password if !is_valid_password(value) => Some(PASSWORD_TOO_SHORT),
            Field::PhoneNumber if !is_valid_phone(value) => Some(INVALID_PHONE),
            Field::PanNumber if !is_valid_pan(&value.to_uppercase()) => Some(INVALID_PAN),
            Field::AadharNumber if !is_valid_aadhar(value) => Some(INVALID_AADHAR),
            _ => None,
        };

        if let Some(message) = format_error {
            errors.insert(field, message);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_values() -> FieldValues {
        FieldValues {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "jdoe".to_string(),
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
            country_code: "+1".to_string(),
            phone_number: "5551234567".to_string(),
            country: "US".to_string(),
            city: "Chicago".to_string(),
            pan_number: "abcde1234f".to_string(),
            aadhar_number: "123456789012".to_string(),
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_simple_address() {
            assert!(is_valid_email("jane@x.com"));
        }

        #[test]
        fn test_rejects_missing_at_or_dot() {
            assert!(!is_valid_email("janex.com"));
            assert!(!is_valid_email("jane@xcom"));
        }

        #[test]
        fn test_rejects_whitespace() {
            assert!(!is_valid_email(" jane@x.com"));
            assert!(!is_valid_email("jane doe@x.com"));
        }

        #[test]
        fn test_rejects_empty() {
            assert!(!is_valid_email(""));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_accepts_exactly_ten_digits() {
            assert!(is_valid_phone("5551234567"));
        }

        #[test]
        fn test_rejects_formatting_characters() {
            assert!(!is_valid_phone("123-456-7890"));
        }

        #[test]
        fn test_rejects_wrong_length() {
            assert!(!is_valid_phone("555123456"));
            assert!(!is_valid_phone("55512345678"));
        }
    }

    mod pan {
        use super::*;

        #[test]
        fn test_accepts_uppercase_pan() {
            assert!(is_valid_pan("ABCDE1234F"));
        }

        #[test]
        fn test_is_case_sensitive() {
            assert!(!is_valid_pan("abcde1234f"));
        }

        #[test]
        fn test_rejects_wrong_digit_count() {
            assert!(!is_valid_pan("ABCDE123F"));
        }
    }

    mod aadhar {
        use super::*;

        #[test]
        fn test_accepts_exactly_twelve_digits() {
            assert!(is_valid_aadhar("123456789012"));
        }

        #[test]
        fn test_rejects_eleven_and_thirteen_digits() {
            assert!(!is_valid_aadhar("12345678901"));
            assert!(!is_valid_aadhar("1234567890123"));
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_minimum_length_boundary() {
            assert!(!is_valid_password("12345"));
            assert!(is_valid_password("123456"));
        }

        #[test]
        fn test_no_complexity_requirement() {
            assert!(is_valid_password("aaaaaa"));
        }
    }

    mod validate_all {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_field_set_yields_all_required_messages() {
            let errors = validate_all(&FieldValues::default());

            assert_eq!(errors.len(), 11);
            for field in Field::ALL {
                assert_eq!(errors.get(&field), Some(&required_message(field)));
            }
        }

        #[test]
        fn test_valid_field_set_yields_no_errors() {
            assert!(validate_all(&valid_values()).is_empty());
        }

        #[test]
        fn test_required_wins_over_format() {
            let mut values = valid_values();
            values.email = "   ".to_string();

            let errors = validate_all(&values);
            assert_eq!(errors.get(&Field::Email), Some(&"Email is required"));
        }

        #[test]
        fn test_format_error_for_bad_email() {
            let mut values = valid_values();
            values.email = "bad".to_string();

            let errors = validate_all(&values);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(&Field::Email), Some(&INVALID_EMAIL));
        }

        #[test]
        fn test_pan_is_uppercased_before_format_check() {
            let mut values = valid_values();
            values.pan_number = "abcde1234f".to_string();
            assert!(validate_all(&values).is_empty());

            values.pan_number = "abcd1234ff".to_string();
            let errors = validate_all(&values);
            assert_eq!(errors.get(&Field::PanNumber), Some(&INVALID_PAN));
        }

        #[test]
        fn test_short_password_message() {
            let mut values = valid_values();
            values.password = "abc".to_string();

            let errors = validate_all(&values);
            assert_eq!(errors.get(&Field::Password), Some(&PASSWORD_TOO_SHORT));
        }

        #[test]
        fn test_fields_without_format_rule_pass_on_any_content() {
            let mut values = valid_values();
            values.first_name = "X Æ A-12".to_string();
            values.username = "j d".to_string();

            assert!(validate_all(&values).is_empty());
        }
    }
}
