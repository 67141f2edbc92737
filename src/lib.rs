//! folio: a portfolio page for the terminal with a persisted light/dark
//! theme and a contact form that hands off to the mail client.

pub mod contact;
pub mod mailto;
pub mod platform;
pub mod preference;
pub mod report;
pub mod surface;
pub mod tui;
pub mod types;
