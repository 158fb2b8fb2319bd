//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and conversion, making them
//! usable in any context (rule systems, rendering, input decoding, configuration).
//!
//! # Board
//!
//! The board is a toroidal grid: a snake leaving one edge re-enters on the opposite one.
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 10 rows (indexed 0-9)
//! - Coordinates grow right (`x`) and down (`y`)
//!
//! # Default Start State
//!
//! | Item | Value |
//! |------|-------|
//! | Head | (2, 1) |
//! | Body | (1, 1) |
//! | Length | 2 |
//! | Heading | `Down` |
//! | Food | (2, 4) |
//!
//! # Timing
//!
//! The simulation advances once per tick. `TICK_MS` is the default tick period; the
//! frame rate of the host is independent of it.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Control, Direction, Position};
//!
//! let control = Control::from_str("up").unwrap();
//! assert_eq!(control.direction(), Some(Direction::Up));
//! assert_eq!(Control::Exit.direction(), None);
//!
//! let moved = Position::new(2, 1) + Direction::Down.delta();
//! assert_eq!(moved, Position::new(2, 2));
//! ```

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (10 rows)
pub const BOARD_HEIGHT: i32 = 10;

/// Default tick period in milliseconds (one snake step per second)
pub const TICK_MS: u32 = 1000;

/// Host frame interval in milliseconds (~60 FPS); unrelated to the tick period.
pub const FRAME_MS: u32 = 16;

/// Starting segments, tail first, head last.
pub const INITIAL_SEGMENTS: [Position; 2] = [Position::new(1, 1), Position::new(2, 1)];

/// Starting food cell.
pub const INITIAL_FOOD: Position = Position::new(2, 4);

/// Starting heading.
pub const INITIAL_DIRECTION: Direction = Direction::Down;

/// A cell coordinate on the board.
///
/// Also used for board bounds, where `x` is the width and `y` the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, delta: Position) -> Position {
        Position::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Snake heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One-cell offset for this heading (screen coordinates: up is `y - 1`).
    pub const fn delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// Decoded player control.
///
/// Produced by input decoding, consumed by the rule systems as per-frame events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    /// Decoded but not acted on by any rule.
    Pause,
    /// Ends the game.
    Exit,
}

impl Control {
    /// The heading this control asks for, if it is a movement control.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Control::Up => Some(Direction::Up),
            Control::Down => Some(Direction::Down),
            Control::Left => Some(Direction::Left),
            Control::Right => Some(Direction::Right),
            Control::Pause | Control::Exit => None,
        }
    }

    /// Parse control from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Control;
    ///
    /// assert_eq!(Control::from_str("EXIT"), Some(Control::Exit));
    /// assert_eq!(Control::from_str("left"), Some(Control::Left));
    /// assert_eq!(Control::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Control::Up),
            "down" => Some(Control::Down),
            "left" => Some(Control::Left),
            "right" => Some(Control::Right),
            "pause" => Some(Control::Pause),
            "exit" => Some(Control::Exit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Up => "UP",
            Control::Down => "DOWN",
            Control::Left => "LEFT",
            Control::Right => "RIGHT",
            Control::Pause => "PAUSE",
            Control::Exit => "EXIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_start_state_is_consistent() {
        assert_eq!(INITIAL_SEGMENTS[1], Position::new(2, 1));
        assert!(!INITIAL_SEGMENTS.contains(&INITIAL_FOOD));
        for p in INITIAL_SEGMENTS.iter().chain(std::iter::once(&INITIAL_FOOD)) {
            assert!(p.x >= 0 && p.x < BOARD_WIDTH);
            assert!(p.y >= 0 && p.y < BOARD_HEIGHT);
        }
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        for d in Direction::ALL {
            let delta = d.delta();
            assert_eq!(delta.x.abs() + delta.y.abs(), 1, "{:?}", d);
        }
        assert_eq!(Direction::Up.delta(), Position::new(0, -1));
        assert_eq!(Direction::Left.delta(), Position::new(-1, 0));
    }

    #[test]
    fn control_parsing_round_trips_names() {
        for c in [
            Control::Up,
            Control::Down,
            Control::Left,
            Control::Right,
            Control::Pause,
            Control::Exit,
        ] {
            assert_eq!(Control::from_str(c.as_str()), Some(c));
        }
        assert_eq!(Control::from_str("sideways"), None);
    }
}
