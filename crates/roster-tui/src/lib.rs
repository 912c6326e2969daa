//! roster-tui - Terminal UI for Roster
//!
//! Draws the layout shell and both screens with ratatui, turns crossterm
//! events into messages for roster-app, and drives the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
