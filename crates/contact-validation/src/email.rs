//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@label.label`: ASCII atext local part, dot-separated domain labels,
/// each label alphanumeric with optional interior hyphens.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email regex is valid")
});

const MAX_LOCAL_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 254;

/// Validates the `local@domain` shape of an email address
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - ASCII local part, no leading, trailing or doubled dots
/// - At least two domain labels separated by dots
/// - Length limits (64 for the local part, 254 overall)
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || !EMAIL_REGEX.is_match(email) {
        return false;
    }

    let Some((local, _domain)) = email.split_once('@') else {
        return false;
    };

    if local.len() > MAX_LOCAL_LEN {
        return false;
    }

    !(local.starts_with('.') || local.ends_with('.') || local.contains(".."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ada@x.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("o'brien@mail.ie"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.com-"));
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("us..er@example.com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("üser@example.com"));
    }

    #[test]
    fn test_length_limits() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", local)));

        let local = "a".repeat(64);
        assert!(is_valid_email(&format!("{}@example.com", local)));

        let label = "d".repeat(62);
        let long = format!("user@{0}.{0}.{0}.{0}.com", label);
        assert!(!is_valid_email(&long));
    }
}
