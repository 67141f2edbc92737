//! Report formatting for CLI output.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;
use serde_json::json;

use crate::types::{Field, MailtoLink, MessagePayload, OutputFormat, ThemeMode, ValidationResult};

/// Format a rejected (or accepted) validation result.
pub fn format_validation(result: &ValidationResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => validation_human(result),
        OutputFormat::Json => to_json(result),
    }
}

/// Format an accepted submission: the payload and the link handed off.
pub fn format_submission(payload: &MessagePayload, link: &MailtoLink, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => submission_human(payload, link),
        OutputFormat::Json => to_json(&json!({
            "valid": true,
            "subject": payload.subject,
            "body": payload.body,
            "mailto": link.as_str(),
        })),
    }
}

/// Format the current theme and where it is persisted.
pub fn format_theme(mode: ThemeMode, location: Option<&str>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => match location {
            Some(loc) => format!("Theme: {}\nStored in: {}\n", mode, loc),
            None => format!("Theme: {}\nStored in: (memory only)\n", mode),
        },
        OutputFormat::Json => to_json(&json!({
            "theme": mode,
            "location": location,
        })),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn validation_human(result: &ValidationResult) -> String {
    if result.valid {
        return "Form is valid.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("=== Form Errors ===\n");
    for field in Field::ALL {
        if let Some(msg) = result.error(field) {
            out.push_str(&format!("{:<8} {}\n", format!("{}:", field.label()), msg));
        }
    }
    out
}

fn submission_human(payload: &MessagePayload, link: &MailtoLink) -> String {
    let mut out = String::new();
    out.push_str("=== Message ===\n");
    out.push_str(&format!("Subject: {}\n", payload.subject));
    out.push('\n');
    out.push_str(&payload.body);
    out.push_str("\n\n");
    out.push_str("=== Mail Link ===\n");
    out.push_str(link.as_str());
    out.push('\n');
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}\n", e))
}

// ============================================================================
// TESTS
// ============================================================================
