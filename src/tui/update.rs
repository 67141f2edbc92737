//! Pure state transitions: (Page, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Actions that make no sense in the current state return the page
//! unchanged (no-op).

use crate::preference;
use crate::surface::submit_contact;
use crate::types::ContactSettings;

use super::state::{Action, Effect, Page, Section, Transition};

/// Pure state transition function.
///
/// Given the current page, an action, and the contact settings, produces
/// the next transition. The effects boundary interprets the result.
pub fn update(page: Page, action: &Action, settings: &ContactSettings) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::ToggleTheme => toggle_theme(page),
        Action::ToggleNav => Transition::Page(Page {
            nav_open: !page.nav_open,
            ..page
        }),
        Action::GoTo(section) => Transition::Page(navigate(page, *section)),
        Action::NextSection => {
            let next = page.section.next();
            Transition::Page(navigate(page, next))
        }
        Action::PrevSection => {
            let prev = page.section.prev();
            Transition::Page(navigate(page, prev))
        }
        Action::Dismiss => Transition::Page(dismiss(page)),
        Action::NextField | Action::PrevField | Action::Input(_) | Action::Backspace => {
            Transition::Page(edit_form(page, action))
        }
        Action::Submit => submit(page, settings),
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Flip the mode on the page and ask for it to be persisted.
fn toggle_theme(mut page: Page) -> Transition {
    let next = preference::toggle(page.theme());
    preference::apply(&mut page, next);
    Transition::Effect(page, Effect::PersistTheme(next))
}

/// Anchor navigation: move to `section` and always collapse the menu.
fn navigate(page: Page, section: Section) -> Page {
    Page {
        section,
        nav_open: false,
        ..page
    }
}

/// Esc: close the menu first; otherwise drop the notice.
fn dismiss(mut page: Page) -> Page {
    if page.nav_open {
        page.nav_open = false;
    } else {
        page.notice = None;
    }
    page
}

/// Field focus and text editing. Only active while typing into the form.
fn edit_form(mut page: Page, action: &Action) -> Page {
    if !page.is_typing() {
        return page;
    }

    let form = &mut page.form;
    match action {
        Action::NextField => form.focus = form.focus.next(),
        Action::PrevField => form.focus = form.focus.prev(),
        Action::Input(c) => form.input.get_mut(form.focus).push(*c),
        Action::Backspace => {
            form.input.get_mut(form.focus).pop();
        }
        _ => {}
    }
    page
}

/// Validate through the page surface; hand off on success.
fn submit(mut page: Page, settings: &ContactSettings) -> Transition {
    if !page.is_typing() {
        return Transition::Page(page);
    }

    match submit_contact(&mut page, settings) {
        Some(link) => Transition::Effect(page, Effect::ComposeMail(link)),
        None => Transition::Page(page),
    }
}

// ============================================================================
// TESTS
// ============================================================================
