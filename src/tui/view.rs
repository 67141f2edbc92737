//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each section has a dedicated render function. The main `render()`
//! lays out header, optional menu, content, and footer. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::types::{ContactSettings, Field};

use super::state::{App, ContactForm, Page, Section};
use super::theme::{palette, Palette};

/// Role lines shown under the name on Home.
const ROLES: [&str; 7] = [
    "Full-Stack Developer",
    "Laravel Developer",
    "PHP Developer",
    "JavaScript Specialist",
    "Web Developer",
    "Frontend Developer",
    "Backend Developer",
];

const ABOUT: &str = "I build web applications end to end: server-side APIs, \
                     relational data models, and the interfaces on top of them. \
                     I care about readable code, predictable deployments, and \
                     pages that load fast on slow connections.";

const PROJECTS: [(&str, &str); 3] = [
    ("Storefront", "Multi-vendor shop with inventory sync and order tracking."),
    ("Clinic Booking", "Appointment scheduling with reminders and staff calendars."),
    ("Portfolio", "This page: theme toggle and a contact form that opens your mail client."),
];

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let page = &app.page;
    let p = palette(page.light_mode);
    let area = frame.area();

    frame.render_widget(Block::default().style(p.base), area);

    let menu_height = if page.nav_open { Section::ALL.len() as u16 + 2 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),           // header
        Constraint::Length(menu_height), // nav menu
        Constraint::Min(0),              // content
        Constraint::Length(1),           // notice
        Constraint::Length(1),           // footer
    ])
    .split(area);

    frame.render_widget(render_header(page, &app.settings, p), chunks[0]);
    if page.nav_open {
        frame.render_widget(render_menu(page, p), chunks[1]);
    }

    let content = chunks[2];
    match page.section {
        Section::Home => render_home(&app.settings, p, frame, content),
        Section::About => render_about(p, frame, content),
        Section::Projects => render_projects(p, frame, content),
        Section::Contact => render_contact(&page.form, page.is_typing(), p, frame, content),
    }

    if let Some(notice) = &page.notice {
        frame.render_widget(Paragraph::new(Span::styled(format!(" {}", notice), p.safe)), chunks[3]);
    }

    frame.render_widget(render_footer(page, app.year, &app.settings, p), chunks[4]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Header: owner name, section tabs, theme toggle glyph.
fn render_header(page: &Page, settings: &ContactSettings, p: &Palette) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(format!(" {} ", settings.recipient_name), p.title)];

    for section in Section::ALL {
        let style = if section == page.section { p.selected } else { p.accent };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", section.title()), style));
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled(page.icon.glyph(), p.accent));

    Paragraph::new(Line::from(spans))
}

/// Expanded navigation menu.
fn render_menu(page: &Page, p: &Palette) -> Paragraph<'static> {
    let lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, &section)| {
            let marker = if section == page.section { "›" } else { " " };
            Line::from(vec![
                Span::styled(format!(" {} [{}] ", marker, i + 1), p.accent),
                Span::raw(section.title()),
            ])
        })
        .collect();

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Menu ").style(p.base))
}

/// Footer: copyright year and keybinding hints.
fn render_footer(page: &Page, year: i32, settings: &ContactSettings, p: &Palette) -> Paragraph<'static> {
    let help = if page.is_typing() {
        "[Tab] next field  [Enter] send  [^T] theme  [^N] menu  [←/→] section  [^C] quit"
    } else {
        "[1-4] section  [m] menu  [t] theme  [c] contact  [Esc] dismiss  [q] quit"
    };

    Paragraph::new(Line::from(vec![
        Span::styled(format!(" © {} {}  ", year, settings.recipient_name), p.dim),
        Span::styled(help, p.dim),
    ]))
}

// ============================================================================
// SECTIONS
// ============================================================================

fn render_home(settings: &ContactSettings, p: &Palette, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  Hi, I'm {}", settings.recipient_name), p.title)),
        Line::from(""),
    ];

    for role in ROLES {
        lines.push(Line::from(vec![Span::styled("  ▸ ", p.accent), Span::raw(role)]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [c] ", p.accent),
        Span::raw("Get in touch"),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_about(p: &Palette, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  About", p.title)),
        Line::from(""),
        Line::from(format!("  {}", ABOUT)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_projects(p: &Palette, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Projects", p.title)),
        Line::from(""),
    ];

    for (name, summary) in PROJECTS {
        lines.push(Line::from(Span::styled(format!("  {}", name), p.accent)));
        lines.push(Line::from(Span::styled(format!("    {}", summary), p.dim)));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_contact(form: &ContactForm, typing: bool, p: &Palette, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Contact", p.title)),
        Line::from(""),
    ];

    for field in Field::ALL {
        lines.extend(field_lines(form, field, typing, p));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Label + value line, then the error line (blank when the field is fine).
fn field_lines(form: &ContactForm, field: Field, typing: bool, p: &Palette) -> [Line<'static>; 2] {
    let focused = typing && form.focus == field;
    let value = form.input.get(field);

    let value_span = if focused {
        Span::styled(format!("{}▏", value), p.focused)
    } else if value.is_empty() {
        Span::styled("…", p.dim)
    } else {
        Span::raw(value.to_string())
    };

    let label_style = if focused { p.accent } else { p.base };
    let input = Line::from(vec![
        Span::styled(format!("  {:<9}", format!("{}:", field.label())), label_style),
        value_span,
    ]);

    let error = match form.errors.get(&field).filter(|m| !m.is_empty()) {
        Some(msg) => Line::from(Span::styled(format!("           {}", msg), p.danger)),
        None => Line::from(""),
    };

    [input, error]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::types::{ContactFormInput, ThemeMode};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        App::new(ThemeMode::Dark, ContactSettings::default(), 2026)
    }

    #[test]
    fn home_shows_owner_and_roles() {
        let screen = draw(&app());
        assert!(screen.contains("Hi, I'm Eslam"));
        assert!(screen.contains("Full-Stack Developer"));
    }

    #[test]
    fn footer_shows_year() {
        let screen = draw(&app());
        assert!(screen.contains("© 2026 Eslam"));
    }

    #[test]
    fn menu_rendered_only_when_open() {
        let mut app = app();
        assert!(!draw(&app).contains("Menu"));
        app.page.nav_open = true;
        assert!(draw(&app).contains("Menu"));
    }

    #[test]
    fn contact_shows_values_and_errors() {
        let mut app = app();
        app.page.section = Section::Contact;
        app.page.form.input = ContactFormInput::new("Jane", "", "");
        app.page
            .form
            .errors
            .insert(Field::Email, "Please enter your email.".to_string());

        let screen = draw(&app);
        assert!(screen.contains("Jane"));
        assert!(screen.contains("Please enter your email."));
    }

    #[test]
    fn notice_is_rendered() {
        let mut app = app();
        app.page.notice = Some("Sent to mail client".to_string());
        assert!(draw(&app).contains("Sent to mail client"));
    }
}
