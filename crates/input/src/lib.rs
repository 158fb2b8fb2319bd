//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::Control`] values. The game
//! consumes controls only; which keys produce them is decided here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
