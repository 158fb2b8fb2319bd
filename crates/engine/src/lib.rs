//! Game session driver.
//!
//! [`GameConfig`] describes a start state; [`Game`] validates it, wires the
//! snake systems and steps frames for a host loop:
//!
//! ```
//! use tui_snake_engine::{Game, GameConfig};
//! use tui_snake_engine::types::Control;
//!
//! let mut game = Game::new(&GameConfig::default()).unwrap();
//! game.start().unwrap();
//! game.push_control(Control::Right);
//! assert!(game.step(1000).unwrap());
//! game.tear_down().unwrap();
//! ```

pub mod config;
pub mod game;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, GameError};
