//! TUI color semantics for the two page modes.
//!
//! Pure data, consumed by the rendering layer. The page's light-mode flag
//! picks one of the two palettes; nothing else varies between modes.
//!
//! Color semantics:
//! - Accent: interactive elements (keybinding hints, focused field)
//! - Danger: field errors
//! - Safe: acknowledgments
//! - Dim: de-emphasized (footer, placeholders)

use ratatui::style::{Color, Modifier, Style};

/// Every style the view needs, for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background and default text.
    pub base: Style,
    /// Header / section titles.
    pub title: Style,
    /// Keybinding hints, links.
    pub accent: Style,
    /// Field error messages.
    pub danger: Style,
    /// Success acknowledgment.
    pub safe: Style,
    /// Footer, placeholders.
    pub dim: Style,
    /// Focused input.
    pub focused: Style,
    /// Current section in the nav bar.
    pub selected: Style,
}

pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::Gray).bg(Color::Black),
    title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    accent: Style::new().fg(Color::Cyan),
    danger: Style::new().fg(Color::LightRed),
    safe: Style::new().fg(Color::Green),
    dim: Style::new().fg(Color::DarkGray),
    focused: Style::new().fg(Color::Black).bg(Color::Cyan),
    selected: Style::new().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
};

pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    accent: Style::new().fg(Color::Blue),
    danger: Style::new().fg(Color::Red),
    safe: Style::new().fg(Color::Green),
    dim: Style::new().fg(Color::Gray),
    focused: Style::new().fg(Color::White).bg(Color::Blue),
    selected: Style::new().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
};

/// Palette for the page's light-mode flag.
pub fn palette(light_mode: bool) -> &'static Palette {
    if light_mode { &LIGHT } else { &DARK }
}

// ============================================================================
// TESTS
// ============================================================================
