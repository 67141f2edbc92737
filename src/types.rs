//! Domain types for folio.
//!
//! Plain data: theme mode, form input, validation outcome, mail payload,
//! and the settings structs the CLI fills in.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// THEME
// ============================================================================

/// The two-valued visual mode of the page.
///
/// Dark is the default: it is what an empty preference store yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The literal string written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Interpret a stored value. Only the exact string `"light"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Icon offered by the toggle control: it shows the mode you would switch to.
    pub fn icon(self) -> ThemeIcon {
        match self {
            ThemeMode::Dark => ThemeIcon::Sun,
            ThemeMode::Light => ThemeIcon::Moon,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph shown on the theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeIcon::Sun => "☀",
            ThemeIcon::Moon => "☾",
        }
    }
}

// ============================================================================
// CONTACT FORM
// ============================================================================

/// The three contact form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Next field in form order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    /// Previous field in form order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// Raw form values captured at submission time. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Outcome of validating one submission.
///
/// `field_errors` always holds an entry for every field; an empty string
/// means the field passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub field_errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// Error message for a field, or `None` if it passed.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors
            .get(&field)
            .map(String::as_str)
            .filter(|msg| !msg.is_empty())
    }
}

/// Subject and body handed to the mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub subject: String,
    pub body: String,
}

/// A composed `mailto:` URI. Building one sends nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailtoLink(pub String);

impl MailtoLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for CLI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Who receives contact messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    /// Name used in the greeting line of the body.
    pub recipient_name: String,
    /// Address the `mailto:` link points at.
    pub recipient_address: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            recipient_name: DEFAULT_RECIPIENT_NAME.to_string(),
            recipient_address: DEFAULT_RECIPIENT_ADDRESS.to_string(),
        }
    }
}

/// Default greeting name.
pub const DEFAULT_RECIPIENT_NAME: &str = "Eslam";

/// Default recipient; real deployments set `FOLIO_MAIL_TO`.
pub const DEFAULT_RECIPIENT_ADDRESS: &str = "contact@example.com";

/// Where the preference flag lives.
#[derive(Debug, Clone, Default)]
pub struct PreferenceConfig {
    /// Preference file path. Empty means "resolve the default at runtime".
    pub path: PathBuf,
}

// ============================================================================
// TESTS
// ============================================================================
