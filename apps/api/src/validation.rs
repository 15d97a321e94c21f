#![allow(dead_code)]

//! Sign-up input validation. Runs in the HTTP handler before anything is
//! handed to the session store; collects every failure instead of stopping
//! at the first so the form can show them all at once.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 50;

/// Pattern check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@` with a
/// non-empty local part, no whitespace anywhere, and a dot in the domain
/// with at least one character on each side.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

pub fn validate_email(email: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_well_formed_email(email) {
        errors.push("Please enter a valid email address".to_string());
    }

    ValidationResult::from_errors(errors)
}

pub fn validate_name(name: &str) -> ValidationResult {
    let mut errors = Vec::new();
    let trimmed = name.trim();

    if name.is_empty() {
        errors.push("Name is required".to_string());
    } else if trimmed.chars().count() < NAME_MIN_LEN {
        errors.push(format!("Name must be at least {NAME_MIN_LEN} characters long"));
    } else if trimmed.chars().count() > NAME_MAX_LEN {
        errors.push(format!("Name must be less than {NAME_MAX_LEN} characters"));
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
    {
        errors.push("Name can only contain letters, spaces, hyphens, and apostrophes".to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Validates the whole sign-up form, concatenating every failure. The user
/// type is a closed enum and is checked at the wire boundary, so it needs no
/// validator here.
pub fn validate_signup(email: &str, name: &str) -> ValidationResult {
    let mut errors = validate_email(email).errors;
    errors.extend(validate_name(name).errors);
    ValidationResult::from_errors(errors)
}

/// Strips angle brackets and surrounding whitespace from free-text input.
pub fn sanitize_input(input: &str) -> String {
    input.trim().replace(['<', '>'], "")
}

/// Normalized sign-up payload handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSignup {
    pub email: String,
    pub name: String,
}

pub fn sanitize_signup(email: &str, name: &str) -> SanitizedSignup {
    SanitizedSignup {
        email: sanitize_input(email).to_lowercase(),
        name: sanitize_input(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_passes() {
        assert!(validate_email("jane@example.com").is_valid);
        assert!(validate_email("jane.doe+jobs@sub.example.co").is_valid);
    }

    #[test]
    fn test_empty_email_is_required() {
        let r = validate_email("");
        assert!(!r.is_valid);
        assert_eq!(r.errors, vec!["Email is required"]);
    }

    #[test]
    fn test_email_without_at_fails() {
        assert!(!validate_email("janeexample.com").is_valid);
    }

    #[test]
    fn test_email_without_domain_dot_fails() {
        assert!(!validate_email("jane@example").is_valid);
    }

    #[test]
    fn test_email_with_whitespace_fails() {
        assert!(!validate_email("jane doe@example.com").is_valid);
    }

    #[test]
    fn test_email_with_two_ats_fails() {
        assert!(!validate_email("jane@doe@example.com").is_valid);
    }

    #[test]
    fn test_email_with_empty_local_fails() {
        assert!(!validate_email("@example.com").is_valid);
    }

    #[test]
    fn test_email_dot_at_domain_edge_fails() {
        assert!(!validate_email("jane@.com").is_valid);
        assert!(!validate_email("jane@com.").is_valid);
    }

    #[test]
    fn test_valid_names_pass() {
        assert!(validate_name("Jane Doe").is_valid);
        assert!(validate_name("O'Connor").is_valid);
        assert!(validate_name("Anne-Marie").is_valid);
    }

    #[test]
    fn test_empty_name_is_required() {
        let r = validate_name("");
        assert_eq!(r.errors, vec!["Name is required"]);
    }

    #[test]
    fn test_one_letter_name_too_short() {
        let r = validate_name("J");
        assert!(!r.is_valid);
        assert_eq!(r.errors, vec!["Name must be at least 2 characters long"]);
    }

    #[test]
    fn test_whitespace_only_name_too_short() {
        assert!(!validate_name("   ").is_valid);
    }

    #[test]
    fn test_overlong_name_fails() {
        let r = validate_name(&"a".repeat(51));
        assert_eq!(r.errors, vec!["Name must be less than 50 characters"]);
    }

    #[test]
    fn test_fifty_char_name_passes() {
        assert!(validate_name(&"a".repeat(50)).is_valid);
    }

    #[test]
    fn test_digits_in_name_fail() {
        let r = validate_name("Jane 2nd");
        assert!(!r.is_valid);
        assert!(r.errors[0].contains("letters, spaces, hyphens"));
    }

    #[test]
    fn test_signup_collects_all_errors() {
        let r = validate_signup("not-an-email", "J");
        assert!(!r.is_valid);
        assert_eq!(r.errors.len(), 2);
    }

    #[test]
    fn test_signup_valid_form() {
        assert!(validate_signup("jane@example.com", "Jane Doe").is_valid);
    }

    #[test]
    fn test_sanitize_strips_angle_brackets() {
        assert_eq!(sanitize_input("  <b>Jane</b>  "), "bJane/b");
    }

    #[test]
    fn test_sanitize_signup_lowercases_email() {
        let s = sanitize_signup(" Jane@Example.COM ", " Jane Doe ");
        assert_eq!(s.email, "jane@example.com");
        assert_eq!(s.name, "Jane Doe");
    }
}
