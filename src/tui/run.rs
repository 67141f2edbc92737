//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: logic lives in the pure layers.
//!
//! Architecture: a key reader thread feeds an mpsc channel; the event loop
//! consumes from it, dispatching to the pure update function.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::mailto::MailComposer;
use crate::preference::{PreferenceStore, ThemePreference};
use crate::types::ContactSettings;

use super::state::{year_from_unix_secs, Action, App, AppEvent, Effect, Section, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// `typing` is true while keystrokes go into the contact form; letters
/// are text then, so only control chords and special keys act as commands.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, typing: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('n') => Some(Action::ToggleNav),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => return Some(Action::PrevSection),
        KeyCode::Right => return Some(Action::NextSection),
        KeyCode::Esc => return Some(Action::Dismiss),
        _ => {}
    }

    if typing {
        return match key.code {
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('m') => Some(Action::ToggleNav),
        KeyCode::Char('c') => Some(Action::GoTo(Section::Contact)),
        KeyCode::Char('h') => Some(Action::PrevSection),
        KeyCode::Char('l') | KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),
        KeyCode::Char(c @ '1'..='4') => Section::from_number(c as u8 - b'0').map(Action::GoTo),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => tx.send(AppEvent::Key(key)),
                Ok(Event::Resize(..)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            if forwarded.is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Current calendar year from the system clock.
pub fn current_year() -> i32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_from_unix_secs(secs)
}

/// Run the page until the user quits.
///
/// The stored theme is loaded once up front; every toggle writes it back.
pub fn run<S, M>(preference: &mut ThemePreference<S>, settings: ContactSettings, mailer: &M) -> io::Result<()>
where
    S: PreferenceStore,
    M: MailComposer + ?Sized,
{
    let mut app = App::new(preference.load(), settings, current_year());

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let AppEvent::Key(key) = event else {
            continue; // resize: just redraw
        };
        let Some(action) = map_key(key, app.page.is_typing()) else {
            continue;
        };

        let page = app.page.clone();
        match update(page, &action, &app.settings) {
            Transition::Page(page) => app.page = page,
            Transition::Quit => app.should_quit = true,
            Transition::Effect(page, effect) => {
                app.page = page;
                handle_effect(effect, &mut app, preference, mailer);
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect<S, M>(effect: Effect, app: &mut App, preference: &mut ThemePreference<S>, mailer: &M)
where
    S: PreferenceStore,
    M: MailComposer + ?Sized,
{
    match effect {
        Effect::PersistTheme(mode) => preference.store(mode),
        Effect::ComposeMail(link) => {
            if let Err(e) = mailer.compose(&link) {
                app.page.notice = Some(format!("Could not open mail client ({}). Link: {}", e, link));
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
