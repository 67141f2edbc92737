//! TUI module: the portfolio page rendered in the terminal.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Page, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Palettes for the two modes
//! - `run`: Effects (terminal, key reader, persistence, mail handoff)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
