//! TUI state algebra: pure types, zero effects.
//!
//! [`Page`] is the whole rendered page and the concrete
//! [`PresentationSurface`]. The transition function and rendering layer
//! both program against these types.

use std::collections::BTreeMap;

use crossterm::event::KeyEvent;

use crate::preference;
use crate::surface::{PresentationSurface, LIGHT_MODE_FLAG};
use crate::types::{ContactFormInput, ContactSettings, Field, MailtoLink, ThemeIcon, ThemeMode};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized; redraw.
    Resize,
}

// ============================================================================
// SECTIONS
// ============================================================================

/// Anchored sections of the page, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Projects, Section::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Section for a 1-based number key.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Next section, stopping at the last.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous section, stopping at the first.
    pub fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

// ============================================================================
// PAGE
// ============================================================================

/// Contact form widget state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub input: ContactFormInput,
    /// Error line under each field. Missing or empty means none.
    pub errors: BTreeMap<Field, String>,
    pub focus: Field,
}

/// The rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub section: Section,
    /// Navigation menu expanded.
    pub nav_open: bool,
    pub form: ContactForm,
    /// Light colors on. Set only through [`PresentationSurface::set_flag`].
    pub light_mode: bool,
    /// Glyph on the theme toggle.
    pub icon: ThemeIcon,
    /// One-shot message; cleared on dismiss.
    pub notice: Option<String>,
}

impl Page {
    /// Fresh page on Home with `mode` applied.
    pub fn new(mode: ThemeMode) -> Self {
        let mut page = Page {
            section: Section::Home,
            nav_open: false,
            form: ContactForm::default(),
            light_mode: false,
            icon: ThemeIcon::Sun,
            notice: None,
        };
        preference::apply(&mut page, mode);
        page
    }

    /// Mode currently shown.
    pub fn theme(&self) -> ThemeMode {
        if self.light_mode { ThemeMode::Light } else { ThemeMode::Dark }
    }

    /// Typing goes into the form only on Contact with the menu closed.
    pub fn is_typing(&self) -> bool {
        self.section == Section::Contact && !self.nav_open
    }
}

impl PresentationSurface for Page {
    fn read_inputs(&self) -> ContactFormInput {
        self.form.input.clone()
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        if message.is_empty() {
            self.form.errors.remove(&field);
        } else {
            self.form.errors.insert(field, message.to_string());
        }
    }

    fn set_flag(&mut self, name: &str, on: bool) {
        if name == LIGHT_MODE_FLAG {
            self.light_mode = on;
        }
    }

    fn select_icon(&mut self, icon: ThemeIcon) {
        self.icon = icon;
    }

    fn reset_inputs(&mut self) {
        self.form.input = ContactFormInput::default();
        self.form.focus = Field::Name;
    }

    fn acknowledge(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub page: Page,
    /// Recipient used by contact submissions.
    pub settings: ContactSettings,
    /// Footer year.
    pub year: i32,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(mode: ThemeMode, settings: ContactSettings, year: i32) -> Self {
        App {
            page: Page::new(mode),
            settings,
            year,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Jump to a section (anchor navigation).
    GoTo(Section),
    NextSection,
    PrevSection,
    /// Expand or collapse the navigation menu.
    ToggleNav,
    ToggleTheme,
    NextField,
    PrevField,
    /// Type a character into the focused field.
    Input(char),
    Backspace,
    /// Submit the contact form.
    Submit,
    /// Close the menu, or clear the notice.
    Dismiss,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this page.
    Page(Page),
    /// Quit the application.
    Quit,
    /// Render this page and execute a side effect.
    Effect(Page, Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Write the theme flag.
    PersistTheme(ThemeMode),
    /// Hand a composed message to the mail client.
    ComposeMail(MailtoLink),
}

// ============================================================================
// CLOCK
// ============================================================================

/// Calendar year (UTC) of a Unix timestamp.
///
/// Civil-from-days conversion; correct for leap years.
pub fn year_from_unix_secs(secs: u64) -> i32 {
    let days = (secs / 86_400) as i64;
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    year as i32
}

// ============================================================================
// TESTS
// ============================================================================
