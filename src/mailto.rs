//! `mailto:` composition and handoff to the mail client.
//!
//! Composing a link is pure. Sending is never done here: the link is given
//! to a [`MailComposer`], which asks the OS to open the user's mail client.

use crate::platform::{open_url, LaunchError};
use crate::types::{MailtoLink, MessagePayload};

/// Compose a `mailto:` link with percent-encoded subject and body.
pub fn mailto_link(recipient: &str, payload: &MessagePayload) -> MailtoLink {
    MailtoLink(format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&payload.subject),
        urlencoding::encode(&payload.body),
    ))
}

/// Something that can put a composed message in front of the user.
pub trait MailComposer {
    fn compose(&self, link: &MailtoLink) -> Result<(), LaunchError>;
}

/// Opens links with the platform's URL handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMailer;

impl MailComposer for SystemMailer {
    fn compose(&self, link: &MailtoLink) -> Result<(), LaunchError> {
        open_url(link.as_str()).inspect_err(|e| {
            tracing::warn!(error = %e, "mail client handoff failed");
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
