//! Terminal rendering for the snake board.
//!
//! [`BoardView`] draws a [`core::BoardSnapshot`] into a [`FrameBuffer`] with no
//! I/O; [`TerminalRenderer`] owns the terminal and flushes only the cells that
//! changed since the previous frame.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
