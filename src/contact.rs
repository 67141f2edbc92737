//! Contact form validation and payload construction.
//!
//! Pure functions, no I/O.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ContactFormInput, Field, MessagePayload, ValidationResult};

pub const NAME_REQUIRED: &str = "Please enter your name.";
pub const EMAIL_REQUIRED: &str = "Please enter your email.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_REQUIRED: &str = "Please enter a message.";

/// Form whitespace as a regex class body. Mirrors [`is_form_space`].
///
/// Unicode `Zs`, TAB through CR, LS, PS, and BOM. NEL (U+0085) is not
/// whitespace here, unlike `char::is_whitespace`.
const FORM_SPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local@domain.tld`-shaped, no form whitespace, no extra `@`.
///
/// Loose on purpose: no TLD length or label checks. Keep it that way.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{}@]+", FORM_SPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("static email pattern")
});

/// Validate all three fields. No short-circuit: every field gets an entry.
pub fn validate(input: &ContactFormInput) -> ValidationResult {
    let mut field_errors = BTreeMap::new();
    field_errors.insert(Field::Name, required(&input.name, NAME_REQUIRED));
    field_errors.insert(Field::Email, email_error(&input.email));
    field_errors.insert(Field::Message, required(&input.message, MESSAGE_REQUIRED));

    let valid = field_errors.values().all(String::is_empty);
    ValidationResult { valid, field_errors }
}

/// Whether `email` passes the format check. Expects an already-trimmed value.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Strip leading and trailing form whitespace (see [`is_form_space`]).
pub fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_space)
}

/// Whether `c` counts as whitespace in a form field.
pub fn is_form_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Build the subject/body pair for a validated input.
///
/// Only meaningful when `validate(input).valid` holds; the caller gates.
pub fn build_payload(input: &ContactFormInput, recipient_name: &str) -> MessagePayload {
    let name = trim_form(&input.name);
    let email = trim_form(&input.email);
    let message = trim_form(&input.message);

    let subject = format!("Portfolio Contact from {}", name);
    let body = format!(
        "Hello {recipient_name},\n\
         \n\
         I found your portfolio and would like to get in touch.\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         Best regards,\n\
         {name}"
    );

    MessagePayload { subject, body }
}

// ============================================================================
// INTERNAL
// ============================================================================

fn required(value: &str, message: &str) -> String {
    if trim_form(value).is_empty() {
        message.to_string()
    } else {
        String::new()
    }
}

fn email_error(value: &str) -> String {
    let trimmed = trim_form(value);
    if trimmed.is_empty() {
        EMAIL_REQUIRED.to_string()
    } else if !is_valid_email(trimmed) {
        EMAIL_INVALID.to_string()
    } else {
        String::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, message: &str) -> ContactFormInput {
        ContactFormInput::new(name, email, message)
    }

    #[test]
    fn complete_input_is_valid() {
        let result = validate(&input("Jane", "jane@x.com", "Hi"));
        assert!(result.valid);
        for field in Field::ALL {
            assert_eq!(result.field_errors[&field], "");
        }
    }

    #[test]
    fn empty_input_reports_every_field() {
        let result = validate(&input("", "bad", ""));
        assert!(!result.valid);
        assert_eq!(result.error(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(result.error(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(result.error(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let result = validate(&input("   ", "\t", "\n \n"));
        assert!(!result.valid);
        assert_eq!(result.error(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(result.error(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(result.error(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let result = validate(&input("\u{FEFF}", "\u{FEFF} \u{FEFF}", " \u{FEFF}\n"));
        assert!(!result.valid);
        assert_eq!(result.error(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(result.error(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(result.error(Field::Message), Some(MESSAGE_REQUIRED));

        let result = validate(&input("Jane", "a\u{FEFF}b@c.d", "Hi"));
        assert_eq!(result.error(Field::Email), Some(EMAIL_INVALID));

        let result = validate(&input("Jane", "\u{FEFF}jane@x.com\u{FEFF}", "Hi"));
        assert!(result.valid);
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert!(!is_form_space('\u{85}'));
        let result = validate(&input("\u{85}", "a\u{85}b@c.d", "\u{85}"));
        assert!(result.valid);
    }

    #[test]
    fn form_space_covers_separators_and_line_breaks() {
        for c in [
            '\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{A0}', '\u{2003}', '\u{2028}', '\u{3000}', '\u{FEFF}',
        ] {
            assert!(is_form_space(c), "{:?} should be whitespace", c);
            assert!(!is_valid_email(&format!("a{}b@c.d", c)), "{:?} inside email", c);
        }
        assert!(!is_form_space('\u{200B}'));
    }

    #[test]
    fn single_bad_field_invalidates_the_form() {
        let result = validate(&input("Jane", "jane@x.com", ""));
        assert!(!result.valid);
        assert_eq!(result.error(Field::Name), None);
        assert_eq!(result.error(Field::Email), None);
        assert_eq!(result.error(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn email_surrounding_whitespace_is_trimmed_before_matching() {
        let result = validate(&input("Jane", "  jane@x.com  ", "Hi"));
        assert!(result.valid);
    }

    #[test]
    fn minimal_email_shape_passes() {
        for email in ["a@b.c", "first.last@sub.domain.org", "x+tag@y.z", "a@b.c.d"] {
            assert!(is_valid_email(email), "{} should pass", email);
        }
    }

    #[test]
    fn malformed_emails_fail() {
        for email in [
            "plain",
            "no-at.example.com",
            "a@b",
            "a@@b.c",
            "a@b@c.d",
            "a b@c.d",
            "a@b .c",
            "@b.c",
            "a@.c",
            "a@b.",
        ] {
            assert!(!is_valid_email(email), "{} should fail", email);
        }
    }

    #[test]
    fn laxity_is_preserved() {
        // Single-letter TLDs and odd punctuation are accepted on purpose.
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("!#$@%.&"));
    }

    #[test]
    fn payload_subject_uses_trimmed_name() {
        let payload = build_payload(&input("  Jane ", "jane@x.com", "Hi"), "Eslam");
        assert_eq!(payload.subject, "Portfolio Contact from Jane");
    }

    #[test]
    fn payload_trims_byte_order_marks() {
        let payload = build_payload(&input("\u{FEFF}Jane\u{FEFF}", "jane@x.com", "Hi\u{FEFF}"), "Eslam");
        assert_eq!(payload.subject, "Portfolio Contact from Jane");
        assert!(payload.body.contains("Message:\nHi\n"));
    }

    #[test]
    fn payload_body_follows_template() {
        let payload = build_payload(&input("Jane", " jane@x.com ", " Hi there "), "Eslam");
        let expected = "Hello Eslam,\n\
                        \n\
                        I found your portfolio and would like to get in touch.\n\
                        \n\
                        Name: Jane\n\
                        Email: jane@x.com\n\
                        \n\
                        Message:\n\
                        Hi there\n\
                        \n\
                        Best regards,\n\
                        Jane";
        assert_eq!(payload.body, expected);
    }

    #[test]
    fn payload_keeps_multiline_message_verbatim() {
        let payload = build_payload(&input("Jane", "jane@x.com", "line one\nline two"), "Eslam");
        assert!(payload.body.contains("Message:\nline one\nline two\n\nBest regards,"));
    }
}
