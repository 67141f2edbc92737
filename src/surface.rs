//! The page as a capability interface.
//!
//! Core logic never touches rendered state directly; it goes through
//! [`PresentationSurface`]. The terminal page implements it for real,
//! tests implement it with a recorder.

use crate::contact::{build_payload, validate};
use crate::mailto::mailto_link;
use crate::types::{ContactFormInput, ContactSettings, Field, MailtoLink, ThemeIcon};

/// Name of the state flag that switches the page to light colors.
pub const LIGHT_MODE_FLAG: &str = "light-mode";

/// One-shot acknowledgment shown after a successful submission.
pub const SUBMIT_ACKNOWLEDGMENT: &str =
    "Your email client will open with the message pre-filled. Please send the email to complete your message.";

/// What the core needs from the rendered page.
pub trait PresentationSurface {
    /// Current values of the three form inputs.
    fn read_inputs(&self) -> ContactFormInput;

    /// Show `message` next to `field`. An empty message clears it.
    fn show_field_error(&mut self, field: Field, message: &str);

    /// Set or clear a named visual-state flag.
    fn set_flag(&mut self, name: &str, on: bool);

    /// Choose the glyph on the theme toggle.
    fn select_icon(&mut self, icon: ThemeIcon);

    /// Empty all form inputs.
    fn reset_inputs(&mut self);

    /// Show a one-shot message to the user.
    fn acknowledge(&mut self, message: &str);
}

/// Run one contact form submission against `surface`.
///
/// Every field's error slot is rewritten. On success the inputs are reset,
/// the acknowledgment is shown, and the composed link is returned for the
/// caller to hand to a [`MailComposer`](crate::mailto::MailComposer).
pub fn submit_contact<S: PresentationSurface + ?Sized>(
    surface: &mut S,
    settings: &ContactSettings,
) -> Option<MailtoLink> {
    let input = surface.read_inputs();
    let result = validate(&input);

    for field in Field::ALL {
        surface.show_field_error(field, result.error(field).unwrap_or(""));
    }

    if !result.valid {
        tracing::debug!("contact form rejected");
        return None;
    }

    let payload = build_payload(&input, &settings.recipient_name);
    let link = mailto_link(&settings.recipient_address, &payload);

    surface.reset_inputs();
    surface.acknowledge(SUBMIT_ACKNOWLEDGMENT);

    Some(link)
}

// ============================================================================
// TESTS
// ============================================================================
